use crate::model::CommandEntry;

pub trait Source {
    fn entries(&self) -> Vec<CommandEntry>;
}

pub mod builtin;
