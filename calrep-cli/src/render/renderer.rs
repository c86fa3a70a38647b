use calrep_core::{
    Config, Event, ParseResult, SkippedBlock,
    render::{format_event_line, format_summary_header, format_total_days, format_total_hours},
};
use termimad::{
    MadSkin,
    crossterm::style::{Attribute, Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub timestamp_format: String,
    pub hours_per_day: f64,
    pub use_color: bool,
}

impl RenderOptions {
    pub fn from_config(config: &Config, use_color: bool) -> Self {
        Self {
            date_format: config.date_format.clone(),
            timestamp_format: config.timestamp_format.clone(),
            hours_per_day: config.hours_per_day,
            use_color,
        }
    }
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        let mut skin = MadSkin::default();
        skin.headers[0].set_fg(Color::Red);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.inline_code.set_fg(Color::Green);
        Self { skin, opts }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_report(&self, result: &ParseResult) {
        println!("\n");
        for event in &result.events {
            self.print_event_line(event);
        }
        println!("\n");
        self.print_summary(result);
    }

    fn print_event_line(&self, event: &Event) {
        let line = format_event_line(event, &self.opts.timestamp_format);
        if !self.opts.use_color {
            println!("{line}");
            return;
        }
        // `<timestamp>: <hours> hours done`
        match line.rsplit_once(": ") {
            Some((timestamp, rest)) => {
                println!("{}: {}", timestamp.with(Color::Cyan), rest.with(Color::Yellow))
            }
            None => println!("{line}"),
        }
    }

    fn print_summary(&self, result: &ParseResult) {
        let header = format_summary_header(result, &self.opts.date_format);
        let hours = format_total_hours(result);
        let days = format_total_days(result, self.opts.hours_per_day);
        if self.opts.use_color {
            println!("{}", header.bold());
            println!("{}", hours.with(Color::Yellow));
            println!("{}", days.with(Color::Yellow));
        } else {
            println!("{header}");
            println!("{hours}");
            println!("{days}");
        }
    }

    pub fn print_skipped(&self, skipped: &[SkippedBlock]) {
        if skipped.is_empty() {
            return;
        }
        self.print_md("\n# Skipped blocks:");
        for s in skipped {
            let first_line = s.block.lines().next().unwrap_or_default();
            self.print_md(&format!("* `{}`: {}", first_line.trim(), s.reason));
        }
    }
}
