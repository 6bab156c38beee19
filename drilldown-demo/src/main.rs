//! Interactive demo: a permit-operation catalog browsed with the
//! drill-down navigator. Logs to drilldown-demo.log; q or Esc quits.

use std::fs::File;
use std::time::Duration;

use drilldown::{
    translate_events, Config, Dataset, Entry, Event, Key, Navigator, Record, Terminal,
};
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

fn catalog() -> Dataset {
    let leaf = |text: &str, permit: &str, desc: &str| {
        Entry::leaf(
            Record::new().field("text", text),
            Record::new()
                .field("text", text)
                .field("permit-type", permit)
                .field("description", desc),
        )
    };

    vec![
        Entry::branch(
            Record::new().field("text", "Building projects"),
            vec![
                leaf(
                    "New building",
                    "building-permit",
                    "Construct a new residential or commercial building",
                ),
                leaf(
                    "Extension",
                    "building-permit",
                    "Extend an existing building outward or upward",
                ),
                Entry::branch(
                    Record::new().field("text", "Alterations"),
                    vec![
                        leaf(
                            "Facade changes",
                            "action-permit",
                            "Alter windows, cladding or exterior colors",
                        ),
                        leaf(
                            "Interior load-bearing changes",
                            "building-permit",
                            "Modify load-bearing walls or building services",
                        ),
                    ],
                ),
            ],
        ),
        Entry::branch(
            Record::new().field("text", "Outdoor structures"),
            vec![
                leaf("Fence", "action-permit", "Build a fence along a lot boundary"),
                leaf("Shed", "action-permit", "Erect a light shelter or shed"),
                leaf(
                    "Advertising sign",
                    "action-permit",
                    "Install an illuminated or fixed sign",
                ),
            ],
        ),
        Entry::branch(
            Record::new().field("text", "Demolition"),
            vec![
                leaf(
                    "Full demolition",
                    "demolition-permit",
                    "Demolish a building entirely",
                ),
                leaf(
                    "Partial demolition",
                    "demolition-permit",
                    "Demolish part of a building",
                ),
            ],
        ),
        leaf(
            "Request advice",
            "advice",
            "Ask the building authority before applying",
        ),
    ]
}

fn run() -> drilldown::Result<()> {
    let config = Config::new()
        .width(44)
        .speed(Duration::from_millis(250))
        .base_model(Record::new().field("title", "Select an operation"))
        .on_select(|record| match record {
            Some(record) => log::info!(
                "selected {:?} ({:?})",
                record.get("text"),
                record.get("permit-type")
            ),
            None => log::info!("selection cleared"),
        });

    let mut nav = Navigator::new(config);
    nav.reset(catalog());

    let mut terminal = Terminal::new()?;

    loop {
        let animating = nav.tick();
        let root = nav.element();
        terminal.render(&root)?;

        let timeout = if animating {
            Some(Duration::from_millis(16))
        } else {
            None
        };
        let raw = terminal.poll(timeout)?;
        let events = translate_events(&raw, &root, terminal.layout());

        for event in events {
            if let Event::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } = event
            {
                return Ok(());
            }
            nav.handle_event(&event);
        }
    }
}

fn main() {
    let log_file = File::create("drilldown-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, LogConfig::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}
