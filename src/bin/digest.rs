use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use daily_digest::filter::{TopicFilter, filter_articles, topic_from_query};
use daily_digest::page::{DAILY_COUNT_DEFAULT, PageOptions, load_page};
use daily_digest::prefs::{Theme, ThemeStore};
use daily_digest::render::{LayoutKind, render};
use daily_digest::sampler::{select_daily_on, today_utc};
use daily_digest::source::{DEFAULT_DATA_PATH, DataSource, Loader};
use daily_digest::storage;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "digest",
    version,
    about = "Render a daily news digest from a static JSON feed"
)]
struct Cli {
    #[command(flatten)]
    feed: FeedArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// Feed location: a file path or an http(s) URL.
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH)]
    data: String,
    /// Only include articles tagged with this topic (case/whitespace-insensitive).
    #[arg(short, long, global = true)]
    topic: Option<String>,
    /// Raw URL query string, e.g. "?topic=%D0%9D%D0%B0%D1%83%D0%BA%D0%B0". --topic wins.
    #[arg(long, global = true)]
    query: Option<String>,
    /// Number of daily articles.
    #[arg(short = 'n', long, global = true, default_value_t = DAILY_COUNT_DEFAULT)]
    count: usize,
    /// Calendar day (YYYY-MM-DD) seeding the selection; defaults to today in UTC.
    #[arg(short = 'd', long, global = true)]
    date: Option<String>,
    /// Path prefix for topic links in HTML output.
    #[arg(long, global = true, default_value = "/")]
    base_path: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the digest to stdout.
    Show(ShowArgs),
    /// Write the digest as an HTML page.
    Build(BuildArgs),
    /// Save the daily selection as CSV or JSON.
    Export(ExportArgs),
    /// Print or set the stored display theme.
    Theme(ThemeArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PageLayout {
    List,
    Sidebar,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ThemeChoice {
    Light,
    Dark,
}

impl From<ThemeChoice> for Theme {
    fn from(t: ThemeChoice) -> Self {
        match t {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Print the page model as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Page layout.
    #[arg(long, value_enum, default_value = "list")]
    layout: PageLayout,
    /// Output HTML file.
    #[arg(long, default_value = "index.html")]
    out: PathBuf,
    /// Theme for this page; defaults to the stored preference.
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output file (format inferred by --format or extension).
    #[arg(long)]
    out: PathBuf,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ThemeArgs {
    /// New theme. Without a value the current preference is printed.
    #[arg(value_enum)]
    value: Option<ThemeChoice>,
    /// Flip between light and dark.
    #[arg(long, conflicts_with = "value")]
    toggle: bool,
    /// Preference file (defaults to the user config dir).
    #[arg(long)]
    store: Option<PathBuf>,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid --date {:?}, expected YYYY-MM-DD", s))
}

impl FeedArgs {
    fn source(&self) -> DataSource {
        DataSource::parse(&self.data)
    }

    fn options(&self) -> Result<PageOptions> {
        let date = match &self.date {
            Some(s) => parse_date(s)?,
            None => today_utc(),
        };
        let topic = self
            .topic
            .clone()
            .or_else(|| self.query.as_deref().and_then(topic_from_query));
        Ok(PageOptions {
            topic,
            daily_count: self.count,
            date,
            base_path: self.base_path.clone(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Show(args) => cmd_show(&cli.feed, args),
        Command::Build(args) => cmd_build(&cli.feed, args),
        Command::Export(args) => cmd_export(&cli.feed, args),
        Command::Theme(args) => cmd_theme(args),
    }
}

fn cmd_show(feed: &FeedArgs, args: ShowArgs) -> Result<()> {
    let opts = feed.options()?;
    let page = load_page(&Loader::default(), &feed.source(), &opts);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print!("{}", render(LayoutKind::Text, &page, Theme::default()));
    }
    Ok(())
}

fn cmd_build(feed: &FeedArgs, args: BuildArgs) -> Result<()> {
    let opts = feed.options()?;
    let theme = match args.theme {
        Some(t) => t.into(),
        None => ThemeStore::default_location().load(),
    };
    let kind = match args.layout {
        PageLayout::List => LayoutKind::List,
        PageLayout::Sidebar => LayoutKind::Sidebar,
    };
    let page = load_page(&Loader::default(), &feed.source(), &opts);
    let html = render(kind, &page, theme);
    storage::write_page(&html, &args.out)?;
    eprintln!(
        "Wrote {} page ({} articles) to {}",
        kind.layout().name(),
        page.cards().len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_export(feed: &FeedArgs, args: ExportArgs) -> Result<()> {
    let opts = feed.options()?;
    let data = Loader::default().load(&feed.source())?;
    let filtered = filter_articles(&data.articles, &TopicFilter::new(opts.topic.as_deref()));
    let daily = select_daily_on(&filtered, opts.daily_count, opts.date);

    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => args.out.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => storage::save_csv(&daily, &args.out)?,
        "json" => storage::save_json(&daily, &args.out)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} articles to {}", daily.len(), args.out.display());
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> Result<()> {
    let store = match args.store {
        Some(p) => ThemeStore::new(p),
        None => ThemeStore::default_location(),
    };
    let next = match (args.value, args.toggle) {
        (Some(v), _) => Some(Theme::from(v)),
        (None, true) => Some(store.load().toggled()),
        (None, false) => None,
    };
    match next {
        Some(theme) => {
            store.save(theme)?;
            println!("{}", theme);
        }
        None => println!("{}", store.load()),
    }
    Ok(())
}
