pub mod exec;
pub mod save;
pub mod synth;

pub use exec::exec;
pub use save::save;
pub use synth::{commit_directives, render_script, synthesize, Script, ScriptOptions};
