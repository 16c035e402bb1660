use daygen_core::{CreatedDay, ScaffoldOutcome};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub use_color_stderr: bool,
    pub quiet: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let mut skin = MadSkin::default();
        skin.inline_code.set_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        Self { skin, opts }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.quiet {
            return;
        }
        if self.opts.use_color {
            println!("{}", message.to_string().with(Color::Cyan));
        } else {
            println!("{message}");
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color_stderr {
            eprintln!("{}", message.to_string().with(Color::Red));
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_outcome(&self, outcome: &ScaffoldOutcome) {
        for line in outcome_lines(outcome) {
            self.print_info(&line);
        }
        if let ScaffoldOutcome::Created(created) = outcome {
            self.print_next_steps(created);
        }
    }

    fn print_next_steps(&self, created: &CreatedDay) {
        if self.opts.quiet {
            return;
        }
        let input = created.input.display();
        let stub = created.stub.display();
        if self.opts.use_color {
            let md = format!(
                "**Next steps:**\n* Add your puzzle input to `{input}`\n* Implement part 1 and part 2 in `{stub}`\n"
            );
            self.skin.print_text(&md);
        } else {
            println!("Next steps:");
            println!("  1. Add your puzzle input to {input}");
            println!("  2. Implement part 1 and part 2 in {stub}");
        }
    }
}

/// Informational lines for an outcome, in the order the work happened.
pub fn outcome_lines(outcome: &ScaffoldOutcome) -> Vec<String> {
    match outcome {
        ScaffoldOutcome::AlreadyExists { dir, .. } => {
            vec![format!("Directory already exists: {}", dir.display())]
        }
        ScaffoldOutcome::Created(created) => vec![
            format!("Created directory: {}", created.dir.display()),
            format!("Created: {}", created.stub.display()),
            format!("Created: {}", created.input.display()),
            String::new(),
            format!("Day {} boilerplate generated successfully!", created.day),
        ],
    }
}
