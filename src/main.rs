use miwok_words::{get_all, get_words, Category, Export, ExportError, WordList};
use rusqlite::{Connection, OpenFlags};
use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: miwok-words <catalog.sqlite> [category] [csv|md|json] (or set MIWOK_DB_PATH)";

enum Format {
    Csv,
    Markdown,
    Json,
}

impl Format {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Format::Csv),
            "md" | "markdown" => Some(Format::Markdown),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    fn render(&self, list: &WordList) -> Result<String, ExportError> {
        match self {
            Format::Csv => list.to_csv(),
            Format::Markdown => list.to_md(),
            Format::Json => list.to_json(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let db_path = args
        .next()
        .or_else(|| env::var("MIWOK_DB_PATH").ok())
        .ok_or(USAGE)?;
    let category = match args.next().as_deref() {
        None | Some("all") => None,
        Some(key) => Some(key.parse::<Category>()?),
    };
    let format = match args.next() {
        Some(f) => Format::parse(&f).ok_or(USAGE)?,
        None => Format::Markdown,
    };

    let conn = Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    info!(path = %db_path, "opened catalog");

    let lists = match category {
        Some(category) => vec![get_words(&conn, category)?],
        None => get_all(&conn)?,
    };
    for list in &lists {
        println!("{}", format.render(list)?);
    }
    Ok(())
}
