//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analysis::AnalysisReport;
use chatlens::cli::{Args, OutputFormat};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::filter::{FilterConfig, Selector, apply_filters, participants};
use chatlens::lexicon::Lexicon;
use chatlens::output::{to_csv, to_json};
use chatlens::parser::TranscriptParser;
use chatlens::{ChatlensError, MessageRecord};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();

    let parser = TranscriptParser::with_config(ParserConfig::new().with_date_order(args.date_order()));
    let records = parser.parse_file(&args.input)?;
    log::info!(
        "parsed {} records from {} in {:.2}s",
        records.len(),
        args.input.display(),
        start.elapsed().as_secs_f64()
    );

    if args.list_users {
        for name in participants(&records) {
            println!("{name}");
        }
        return Ok(());
    }

    let mut date_filter = FilterConfig::new();
    if let Some(ref after) = args.after {
        date_filter = date_filter.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        date_filter = date_filter.with_date_to(before)?;
    }
    let records = apply_filters(records, &date_filter);

    let selector = args
        .user
        .as_deref()
        .map_or(Selector::Overall, Selector::from);
    if let Selector::Author(ref name) = selector {
        if !participants(&records).contains(name) {
            log::warn!("'{name}' has no messages in the selected range");
        }
    }

    let rendered = match args.format {
        OutputFormat::Csv => {
            let selected = apply_filters(records, &FilterConfig::new().with_selector(selector));
            to_csv(&selected)?
        }
        OutputFormat::Json => to_json(&build_report(args, &records, &selector)?)?,
        OutputFormat::Text => {
            let mut text = String::new();
            render_text(&mut text, &build_report(args, &records, &selector)?)
                .map_err(io::Error::other)?;
            text
        }
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, rendered)?;
            eprintln!("✅ {} output saved to {}", args.format, path.display());
        }
        None => print!("{rendered}"),
    }

    log::debug!("finished in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn build_report(
    args: &Args,
    records: &[MessageRecord],
    selector: &Selector,
) -> Result<AnalysisReport, ChatlensError> {
    let mut config = match args.config {
        Some(ref path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(top) = args.top {
        config = config.with_top_words(top);
    }

    let custom;
    let lexicon = if args.has_custom_lexicon() {
        custom = Lexicon::from_files(
            args.stop_words.as_deref(),
            args.positive.as_deref(),
            args.negative.as_deref(),
        )?;
        &custom
    } else {
        Lexicon::shared()
    };

    Ok(AnalysisReport::build(
        records,
        selector,
        args.keyword.as_deref(),
        lexicon,
        &config,
    ))
}

/// Human-readable rendering of a report.
fn render_text(out: &mut impl Write, report: &AnalysisReport) -> fmt::Result {
    writeln!(out, "📊 chatlens v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
    writeln!(out, "👤 Selection: {}", report.selector)?;
    writeln!(out, "👥 Participants: {}", report.participants.join(", "))?;
    writeln!(out)?;

    let stats = &report.stats;
    writeln!(out, "📈 Stats:")?;
    writeln!(out, "   Messages:  {}", stats.messages)?;
    writeln!(out, "   Words:     {}", stats.words)?;
    writeln!(out, "   Media:     {}", stats.media)?;
    writeln!(out, "   Links:     {}", stats.links)?;

    let types = &report.message_types;
    writeln!(
        out,
        "   Types:     {} text, {} media, {} link",
        types.text, types.media, types.link
    )?;

    if let Some(ref keyword) = report.keyword {
        writeln!(out, "🔎 Keyword '{}': {}", keyword.keyword, keyword.count)?;
    }

    if report.is_empty() {
        writeln!(out)?;
        writeln!(out, "No messages to analyze.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "📅 Activity:")?;
    if let Some(ref day) = report.busiest_day {
        writeln!(out, "   Busiest day:    {} ({})", day.label, day.count)?;
    }
    if let Some(ref month) = report.busiest_month {
        writeln!(out, "   Busiest month:  {} ({})", month.label, month.count)?;
    }
    if let Some((hour, count)) = report
        .active_hours
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))
    {
        writeln!(out, "   Busiest hour:   {hour:02}:00 ({count})")?;
    }
    for point in &report.monthly_timeline {
        writeln!(out, "   {:<9} {}", point.label, point.count)?;
    }

    if let Some(ref busy) = report.busy_users {
        writeln!(out)?;
        writeln!(out, "🏆 Most active:")?;
        for share in &busy.shares {
            writeln!(out, "   {:<20} {:>6.2}%", share.name, share.percent)?;
        }
    }
    if let Some(ref times) = report.response_times {
        writeln!(
            out,
            "⏱️  Average response: {:.1} min ({} replies)",
            times.average_minutes, times.samples
        )?;
    }

    if !report.common_words.is_empty() {
        writeln!(out)?;
        writeln!(out, "💬 Common words:")?;
        for word in &report.common_words {
            writeln!(out, "   {:<20} {}", word.label, word.count)?;
        }
    }

    if !report.emoji.is_empty() {
        let top: Vec<String> = report
            .emoji
            .iter()
            .take(10)
            .map(|e| format!("{} {}", e.label, e.count))
            .collect();
        writeln!(out, "😀 Emoji: {}", top.join("  "))?;
    }

    let sentiment = &report.sentiment;
    writeln!(
        out,
        "🙂 Sentiment: {} positive, {} negative, {} neutral",
        sentiment.positive, sentiment.negative, sentiment.neutral
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlens::parser::parse;

    fn report(raw: &str) -> AnalysisReport {
        AnalysisReport::build(
            &parse(raw),
            &Selector::Overall,
            Some("hi"),
            Lexicon::shared(),
            &AnalysisConfig::default(),
        )
    }

    #[test]
    fn test_render_text_full_report() {
        let mut out = String::new();
        render_text(
            &mut out,
            &report(
                "01/02/23, 10:00 AM - Alice: hello\n\
                 01/02/23, 10:05 AM - Bob: hi there",
            ),
        )
        .unwrap();
        assert!(out.contains("Messages:  2"));
        assert!(out.contains("Keyword 'hi': 1"));
        assert!(out.contains("Most active"));
        assert!(out.ends_with("neutral\n"));
    }

    #[test]
    fn test_render_text_empty_report() {
        let mut out = String::new();
        render_text(&mut out, &report("")).unwrap();
        assert!(out.contains("No messages to analyze."));
        assert!(!out.contains("Sentiment"));
    }

    /// Writer that refuses every write.
    struct Closed;

    impl Write for Closed {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_render_text_propagates_write_errors() {
        assert!(render_text(&mut Closed, &report("")).is_err());
    }
}
