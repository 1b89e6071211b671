pub mod console;

pub use console::ConsoleView;
