use crate::config::DisplayConfig;
use crate::core::classify::StyleTier;
use crate::core::view::{ChartPoint, MetricView, ViewModel, progress_fraction};
use colored::Colorize;

const LABEL_WIDTH: usize = 13;

pub fn print_human(view: &ViewModel, display: &DisplayConfig) {
    println!(
        "Speaking Assessment for {} ({})",
        view.student_name, view.student_id
    );
    println!("Test date: {}", view.test_date);

    println!();
    println!(
        "Overall band {}  {}",
        view.overall.formatted_score,
        tier_badge(view.overall.style_tier)
    );
    println!(
        "{} {}",
        progress_bar(view.overall.progress, display.bar_width),
        percent(view.overall.progress)
    );
    if display.show_feedback {
        println!("{}", view.overall.feedback);
    }

    println!();
    println!("Skills");
    for metric in &view.skills {
        print_skill_row(metric, display);
    }

    println!();
    print_chart(view, display);
}

fn print_skill_row(metric: &MetricView, display: &DisplayConfig) {
    println!(
        "{:<LABEL_WIDTH$} {}  {} {}",
        metric.label,
        metric.formatted_score,
        progress_bar(metric.progress, display.bar_width),
        tier_badge(metric.style_tier)
    );
    if display.show_feedback {
        println!("{:<LABEL_WIDTH$} {}", "", metric.feedback);
    }
}

pub fn print_chart(view: &ViewModel, display: &DisplayConfig) {
    println!("Skill chart (0-9)");
    for point in &view.chart_series {
        println!("{}", chart_row(point, display.chart_width));
    }
}

fn tier_badge(tier: StyleTier) -> String {
    let text = tier.as_str().to_ascii_uppercase();
    match tier {
        StyleTier::Excellent => text.green().bold().to_string(),
        StyleTier::Good => text.blue().bold().to_string(),
        StyleTier::Fair => text.yellow().bold().to_string(),
        StyleTier::Poor => text.red().bold().to_string(),
    }
}

fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn chart_row(point: &ChartPoint, width: usize) -> String {
    let filled = ((progress_fraction(point.value) * width as f64).round() as usize).min(width);
    format!(
        "{:<LABEL_WIDTH$} {} {:.1}",
        point.label,
        "█".repeat(filled),
        point.value
    )
}
