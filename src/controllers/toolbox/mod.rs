mod shell;

pub use shell::Toolbox;
