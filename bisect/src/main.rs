use bisect::{Outcome, SearchReport, bounded_search};

fn main() {
    env_logger::init();

    let data = [0.5, 1.3, 2.7, 3.8, 5.1, 7.6, 9.9];
    let targets = [3.8, 4.0, 10.0, 0.1];

    for target in targets {
        let report = bounded_search(&data, target);
        log::debug!("target {target}: {report:?}");
        println!("{}", report_line(target, &report));
    }
}

/// Classic demo shape: the found value and the upper bound share one label.
fn report_line(target: f64, report: &SearchReport<f64>) -> String {
    let value = match report.outcome {
        Outcome::Found(v) => Some(v),
        Outcome::NotFound { upper_bound } => upper_bound,
    };
    let value = value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "none".to_string());

    format!(
        "search for {target} -> iterations: {}, upper bound: {value}",
        report.iterations
    )
}
