pub mod dolegal;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get() -> BackendBox {
        return Box::<dolegal::DoLegal>::default();
    }
}
