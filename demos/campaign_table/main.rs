//! Campaign Table Example
//!
//! Walks the campaign performance table through the interactions of the
//! dashboard page:
//! - Column sorting (ascending, descending, new column)
//! - Status filter and name search
//! - Page size changes and clamped page navigation
//! - CSV export of every filtered row
//!
//! Run with `RUST_LOG=debug` to see each state change.

use anyhow::Result;
use insights::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_view(title: &str, table: &TableEngine<Campaign>) {
    let view = table.view();
    let (first, last) = view.pagination.range();

    println!(
        "\n📋 {} (sort: {}, page {}/{})",
        title,
        table.sort(),
        view.current_page(),
        view.total_pages()
    );
    for c in &view.rows {
        println!(
            "    {:<24} {:<10} budget {:>8}  spent {:>8}  roas {}x",
            c.name, c.status.as_str(), c.budget, c.spent, c.roas
        );
    }
    println!("    showing {}-{} of {}", first, last, view.total_filtered());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let campaigns = sample_campaigns();
    let summary = CampaignSummary::from_campaigns(&campaigns);
    println!("🚀 Campaign Manager");
    println!(
        "📦 {} campaigns, {} active, {:.1}% of budget spent",
        summary.total_campaigns, summary.active_campaigns, summary.spend_ratio
    );

    let mut table = TableEngine::with_config(campaigns, TableConfig::default_config())?;
    print_view("Insertion order", &table);

    table.set_sort("budget");
    print_view("Budget ascending", &table);

    table.set_sort("budget");
    print_view("Budget descending", &table);

    table.set_sort("roas");
    print_view("ROI ascending", &table);

    table.set_filter("Active");
    table.set_page_size(2)?;
    table.goto_page(99);
    print_view("Active only, two per page, last page", &table);

    table.set_search("sale");
    print_view("Search 'sale'", &table);

    if let Err(e) = table.set_page_size(0) {
        println!("\n⚠️  {} ({})", e, e.error_code());
    }

    table.set_search("");
    let file = table.export_file();
    println!(
        "\n📤 Export {} ({}, {} rows)",
        file.file_name,
        file.content_type,
        file.row_count()
    );
    println!("{}", file.body);

    let path = file.write_to(&std::env::temp_dir())?;
    println!("\n💾 Written to {}", path.display());

    let mut managed = managed_campaigns();
    let draft = NewCampaign {
        name: "Spring Refresh".to_string(),
        budget: Some(4000.0),
        target: "Returning Customers".to_string(),
        ..NewCampaign::default()
    };
    managed.push(draft.create(&managed)?);

    let mut portfolio = TableEngine::new(managed);
    portfolio.set_type_filter("Email Marketing");
    let summary = CampaignSummary::from_campaigns(portfolio.filtered_rows());
    println!(
        "\n✉️  Email Marketing: {} campaigns, ${} revenue, {:.0}% return on spend",
        summary.total_campaigns, summary.total_revenue, summary.return_on_spend
    );

    let report = &sample_reports()[0];
    let download = report.download(Utc::now());
    println!("\n📄 {} -> {}", report.title, download.file_name);

    Ok(())
}
