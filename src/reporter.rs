use crate::events::{Event, Level};

/// Reporter renders events to the terminal and keeps them for later.
pub struct Reporter {
    events: Vec<Event>,
    verbose: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            events: Vec::new(),
            verbose,
            quiet: false,
        }
    }

    /// A reporter that records but never prints.
    pub fn silent() -> Self {
        Self {
            events: Vec::new(),
            verbose: false,
            quiet: true,
        }
    }

    pub fn record(&mut self, event: Event) {
        if !self.quiet {
            match event.level() {
                Level::Progress if self.verbose => println!("{}", event.message()),
                Level::Progress => {}
                Level::Notice => println!("{}", event.message()),
                Level::Warning | Level::Failure => eprintln!("{}", event.message()),
            }
        }
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}
