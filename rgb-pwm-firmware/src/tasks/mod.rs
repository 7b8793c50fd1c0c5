// Task-Modul: enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod led_fade;

// Re-export der Tasks für einfachen Import
pub use led_fade::led_fade_task;
