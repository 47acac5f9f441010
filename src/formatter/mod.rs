pub mod json;
pub mod quiet;
pub mod text;

use std::io::Write;

use crate::outcome::Outcome;

pub trait Formatter {
    fn format_to(&self, outcomes: &[Outcome], out: &mut dyn Write);

    fn print(&self, outcomes: &[Outcome]) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.format_to(outcomes, &mut lock);
    }
}

pub fn create_formatter(format: &str) -> Box<dyn Formatter> {
    match format {
        "json" => Box::new(json::JsonFormatter),
        "quiet" => Box::new(quiet::QuietFormatter),
        // "text" and any unknown value
        _ => Box::new(text::TextFormatter),
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
