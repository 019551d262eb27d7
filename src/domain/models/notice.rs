use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuthPrompt {
    Login,
    SignUp,
    ForgotPassword,
}

impl fmt::Display for AuthPrompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthPrompt::Login => return write!(f, "Log in to your DoLegal account"),
            AuthPrompt::SignUp => return write!(f, "Create a free DoLegal account"),
            AuthPrompt::ForgotPassword => return write!(f, "Reset your DoLegal password"),
        }
    }
}

/// One-line status shown above the input. Notices are never part of chat
/// history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
    Auth(AuthPrompt),
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Notice::Info(text) => return text.to_string(),
            Notice::Error(text) => return text.to_string(),
            Notice::Auth(prompt) => {
                return format!("{prompt}. Authentication is handled on the DoLegal website.")
            }
        }
    }

    pub fn is_error(&self) -> bool {
        return matches!(self, Notice::Error(_));
    }
}
