#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
    rest: String,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .filter(|e| return !e.is_empty())
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        if args.is_empty() {
            return None;
        }

        let prefix = args.remove(0);
        let rest = text
            .trim()
            .split_once(' ')
            .map(|(_, rest)| return rest.trim_start())
            .unwrap_or("")
            .to_string();
        let cmd = SlashCommand {
            command: prefix,
            args,
            rest,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_new()
            || cmd.is_rename()
            || cmd.is_pin()
            || cmd.is_delete()
            || cmd.is_switch()
            || cmd.is_search()
            || cmd.is_attach()
            || cmd.is_detach()
            || cmd.is_login()
            || cmd.is_signup()
            || cmd.is_forgot_password()
            || cmd.is_logout()
        {
            return Some(cmd);
        }

        return None;
    }

    /// Everything after the command as typed, used for titles, search terms
    /// and file paths. Inner spacing is kept.
    pub fn rest(&self) -> String {
        return self.rest.to_string();
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_new(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_rename(&self) -> bool {
        return ["/rename"].contains(&self.command.as_str());
    }

    pub fn is_pin(&self) -> bool {
        return ["/p", "/pin"].contains(&self.command.as_str());
    }

    pub fn is_delete(&self) -> bool {
        return ["/d", "/delete"].contains(&self.command.as_str());
    }

    pub fn is_switch(&self) -> bool {
        return ["/s", "/switch"].contains(&self.command.as_str());
    }

    pub fn is_search(&self) -> bool {
        return ["/f", "/search"].contains(&self.command.as_str());
    }

    pub fn is_attach(&self) -> bool {
        return ["/a", "/attach"].contains(&self.command.as_str());
    }

    pub fn is_detach(&self) -> bool {
        return ["/detach"].contains(&self.command.as_str());
    }

    pub fn is_login(&self) -> bool {
        return ["/login"].contains(&self.command.as_str());
    }

    pub fn is_signup(&self) -> bool {
        return ["/signup"].contains(&self.command.as_str());
    }

    pub fn is_forgot_password(&self) -> bool {
        return ["/forgot"].contains(&self.command.as_str());
    }

    pub fn is_logout(&self) -> bool {
        return ["/logout"].contains(&self.command.as_str());
    }
}
