use fundscope::analysis::Bucket;
use fundscope::charts::StaticChartRenderer;
use fundscope::report::{InvestorReport, OverallReport, Report, StartupReport};
use std::fs;
use std::path::{Path, PathBuf};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn overall() -> Report {
    Report::Overall(OverallReport {
        total_funding: 180,
        max_funding: 120,
        avg_funding: 90,
        startup_count: 2,
        month_on_month_total: vec![Bucket::new("1-2020", 60.0), Bucket::new("2-2020", 120.0)],
        month_on_month_count: vec![Bucket::new("1-2020", 1.0), Bucket::new("2-2020", 1.0)],
    })
}

fn startup() -> Report {
    Report::Startup(StartupReport {
        startup: "BYJU'S".to_string(),
        recent_rounds: Vec::new(),
        funding_by_year: vec![Bucket::new("2019", 100.0), Bucket::new("2020", 1500.5)],
        funding_by_round: vec![Bucket::new("Series F", 100.0)],
        // Rendered as a "No data" image.
        investor_contributions: Vec::new(),
    })
}

fn investor(name: &str, sectors: Vec<Bucket>) -> Report {
    Report::Investor(InvestorReport {
        investor: name.to_string(),
        recent_investments: Vec::new(),
        top_startups: Vec::new(),
        sectors,
        rounds: Vec::new(),
        cities: Vec::new(),
        yearly_trend: Vec::new(),
    })
}

fn assert_written(paths: &[PathBuf], dir: &Path, stem: &str, charts: &[&str]) {
    let mut expected = vec![dir.join(format!("{stem}.json"))];
    expected.extend(charts.iter().map(|c| dir.join(format!("{stem}_{c}.png"))));
    assert_eq!(paths, expected.as_slice());

    for png in &paths[1..] {
        let bytes = fs::read(png).unwrap();
        assert!(bytes.starts_with(&PNG_MAGIC), "{} is not a PNG", png.display());
    }
}

fn assert_json_round_trip(path: &Path, report: &Report) {
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(written, serde_json::to_value(report).unwrap());
}

#[test]
fn overall_export_writes_json_and_line_charts() {
    let dir = tempfile::tempdir().unwrap();
    let report = overall();
    let paths = StaticChartRenderer::export_report(&report, dir.path()).unwrap();

    assert_written(
        &paths,
        dir.path(),
        "overall",
        &["Month-on-Month_Total", "Month-on-Month_Count"],
    );
    assert_json_round_trip(&paths[0], &report);
}

#[test]
fn startup_export_includes_empty_chart() {
    let dir = tempfile::tempdir().unwrap();
    let report = startup();
    let paths = StaticChartRenderer::export_report(&report, dir.path()).unwrap();

    assert_written(
        &paths,
        dir.path(),
        "startup_BYJU_S",
        &["Funding_Over_Time", "Funding_by_Round", "Investor_Contributions"],
    );
    assert_json_round_trip(&paths[0], &report);
}

#[test]
fn investor_export_handles_empty_and_zero_pies() {
    let investor_charts = [
        "Biggest_Investments",
        "Sectors_Invested_In",
        "Stages_Invested_In",
        "Cities_Invested_In",
        "Year-on-Year_Investment_Trend",
    ];

    let dir = tempfile::tempdir().unwrap();
    let zero_pie = investor(
        "Sequoia Capital",
        vec![Bucket::new("EdTech", 0.0), Bucket::new("FinTech", 0.0)],
    );
    let paths = StaticChartRenderer::export_report(&zero_pie, dir.path()).unwrap();
    assert_written(&paths, dir.path(), "investor_Sequoia_Capital", &investor_charts);
    assert_json_round_trip(&paths[0], &zero_pie);

    let empty = investor("Nobody Ventures", Vec::new());
    let paths = StaticChartRenderer::export_report(&empty, dir.path()).unwrap();
    assert_written(&paths, dir.path(), "investor_Nobody_Ventures", &investor_charts);
    assert_json_round_trip(&paths[0], &empty);
}

#[test]
fn export_creates_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports").join("q1");
    let paths = StaticChartRenderer::export_report(&overall(), &nested).unwrap();

    assert_eq!(paths.len(), 3);
    assert!(paths.iter().all(|p| p.is_file()));
}
