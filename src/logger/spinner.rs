use core::time;
use std::cell::Cell;
use std::fmt::Display;

/// Numbered status line for a fixed number of build steps.
/// The running step ticks on the spinner, finished steps
/// are printed above it.
pub struct Spinner {
    spinner: indicatif::ProgressBar,
    total_steps: usize,
    step: Cell<usize>,
}

pub enum Colour {
    Green,
    Red,
}

impl Spinner {
    pub fn new(total_steps: usize) -> Self {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.white} {msg} [{elapsed}]")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(time::Duration::from_millis(50));

        Spinner {
            spinner,
            total_steps,
            step: Cell::new(0),
        }
    }

    /// Moves on to the next step and shows `msg` next to the spinner
    pub fn start_step(&self, msg: impl Display) {
        self.step.set(self.step.get() + 1);
        self.spinner
            .set_message(step_label(self.step.get(), self.total_steps, msg));
    }

    pub fn finish_step(&self, msg: impl Display) {
        let label = step_label(self.step.get(), self.total_steps, msg);
        self.print_above(format!("  {}", label), Colour::Green);
    }

    pub fn fail_step(&self, err: impl Display) {
        let label = step_label(self.step.get(), self.total_steps, format!("failed: {}", err));
        self.print_above(format!("  {}", label), Colour::Red);
    }

    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }

    fn print_above(&self, msg: String, colour: Colour) {
        self.spinner.suspend(|| {
            println!("{}", get_coloured_message(msg, colour));
        })
    }
}

/// E.g. step_label(2, 4, "resolving links") -> "[2/4] resolving links"
fn step_label(step: usize, total_steps: usize, msg: impl Display) -> String {
    format!("[{}/{}] {}", step, total_steps, msg)
}

fn get_coloured_message<T: AsRef<str> + Display>(
    msg: T,
    colour: Colour,
) -> console::StyledObject<T> {
    match colour {
        Colour::Green => console::style(msg).green(),
        Colour::Red => console::style(msg).red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_carry_step_and_total() {
        assert_eq!(step_label(2, 4, "resolving links"), "[2/4] resolving links");
        assert_eq!(step_label(0, 0, ""), "[0/0] ");
    }

    #[test]
    fn steps_count_up() {
        let spinner = Spinner::new(3);
        spinner.start_step("one");
        spinner.start_step("two");

        assert_eq!(spinner.step.get(), 2);
        spinner.finish();
    }
}
