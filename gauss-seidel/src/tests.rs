use super::*;
use crate::textual::Problem;


pub(crate) const EPSILON: f64 = 1e-9;

pub(crate) fn assert_nearly_eq(a: f64, b: f64) {
    assert!((a - b).abs() < EPSILON, "{a} != {b}");
}

/// The system from the worked example in the README.
pub(crate) fn sample_system() -> LinearSystem {
    LinearSystem::new(
        vec![
            vec![3.857, 0.239, 0.272, 0.258],
            vec![0.491, 3.941, 0.131, 0.178],
            vec![0.436, 0.281, 4.189, 0.416],
            vec![0.317, 0.229, 0.326, 2.971],
        ],
        vec![0.19, 0.179, 0.753, 0.86],
    )
    .unwrap()
}

fn titles_of(report: &Report) -> Vec<&str> {
    report.sections().iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn one_by_one() {
    let system = LinearSystem::new(vec![vec![2.0]], vec![4.0]).unwrap();
    let outcome = solve(&system, Config::default()).unwrap();
    assert_eq!(outcome.solution(), &[2.0]);
    // The first sweep lands on the answer.
    assert_eq!(outcome.sweeps()[1].values, vec![2.0]);
    assert_eq!(outcome.residual().to_string(), "0");
}

#[test]
fn sample_converges_quickly() {
    let outcome = solve(&sample_system(), Config::default()).unwrap();
    assert!(outcome.iterations() < 10);
    assert_eq!(outcome.iterations(), 4);
    // Solved exactly with rational arithmetic.
    let expected = [
        0.019128777508753633,
        0.025922040134524635,
        0.14930868013598747,
        0.2690425448046405,
    ];
    for (actual, expected) in outcome.solution().iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-5, "{actual} vs {expected}");
    }
    assert!(outcome.residual() < 1e-4);
    assert_eq!(
        outcome.sweeps()[1].values,
        vec![0.0493, 0.0393, 0.172, 0.2623]
    );
}

#[test]
fn max_difference_shrinks() {
    let outcome = solve(&sample_system(), Config::default().with_precision(None)).unwrap();
    let differences: Vec<f64> = outcome
        .sweeps()
        .iter()
        .filter_map(|s| s.max_difference)
        .collect();
    assert!(differences.windows(2).all(|w| w[1] < w[0]));
    assert!(*differences.last().unwrap() < 1e-3);
}

#[test]
fn not_jacobi() {
    // x0 = 2 - 0.25 x1, x1 = 2 - 0.4 x0
    let system =
        LinearSystem::new(vec![vec![4.0, 1.0], vec![2.0, 5.0]], vec![8.0, 10.0]).unwrap();
    let config = Config::default()
        .with_precision(None)
        .with_epsilon(1e-12)
        .with_max_sweeps(2);
    let failure = solve(&system, config).unwrap_err();
    assert_eq!(failure.error, Error::DidNotConverge { sweeps: 2 });
    let sweeps = failure.sweeps();
    // Sweep 1: x1 must use the new x0 = 2, not the old x0 = 0.
    assert_eq!(sweeps[1].values[0].to_string(), "2");
    assert_eq!(sweeps[1].values[1].to_string(), "1.2");
    // Sweep 2: x1 uses sweep 2's x0 = 1.7, so 2 - 0.4 * 1.7.
    assert_eq!(sweeps[2].values[0].to_string(), "1.7");
    assert_nearly_eq(sweeps[2].values[1], 2.0 - 0.4 * 1.7);
    // Jacobi would have used sweep 1's x0 = 2, giving 1.2 again.
    assert!((sweeps[2].values[1] - 1.2).abs() > 0.1);
}

#[test]
fn failed_check_stops_before_iterating() {
    let system = LinearSystem::new(
        vec![vec![1.0, 2.0], vec![0.5, 3.0]],
        vec![1.0, 1.0],
    )
    .unwrap();
    let report = gauss_seidel(&system, Config::default()).unwrap();
    assert_eq!(
        titles_of(&report),
        vec![titles::LINEAR_SYSTEM, titles::CONVERGENCE]
    );
    let check = report.section(titles::CONVERGENCE).unwrap();
    assert_eq!(check.status_kind(), Some(StatusKind::Error));
    assert_eq!(
        check.status.as_ref().unwrap().message,
        "Convergence check failed"
    );
    assert!(report.has_error());

    let failure = solve(&system, Config::default()).unwrap_err();
    assert_eq!(failure.error, Error::ConvergenceCheckFailed { rows: vec![0] });
    assert!(failure.sweeps().is_empty());
    assert!(!failure.check().unwrap().passed);
}

#[test]
fn full_report() {
    let report = gauss_seidel(&sample_system(), Config::default()).unwrap();
    assert_eq!(
        titles_of(&report),
        vec![
            titles::LINEAR_SYSTEM,
            titles::CONVERGENCE,
            titles::ITERATION_SYSTEM,
            titles::RESULT_TABLE,
            titles::RESIDUAL,
        ]
    );
    assert!(
        report
            .sections()
            .iter()
            .all(|s| s.status_kind() == Some(StatusKind::Ok))
    );

    let system = report.section(titles::LINEAR_SYSTEM).unwrap();
    assert_eq!(
        system.table.rows[0],
        vec![Cell::from(
            "3.8570*x0 + 0.2390*x1 + 0.2720*x2 + 0.2580*x3 = 0.1900"
        )]
    );

    let iteration = report.section(titles::ITERATION_SYSTEM).unwrap();
    assert_eq!(
        iteration.table.rows[1],
        vec![Cell::from(
            "x1(k+1) = 0.0454 - 0.1246*x0(k+1) - 0.0332*x2(k) - 0.0452*x3(k)"
        )]
    );

    let results = report.section(titles::RESULT_TABLE).unwrap();
    // Initial guess plus four sweeps.
    assert_eq!(results.table.rows.len(), 5);
    assert_eq!(results.table.rows[0][5], Cell::from("-"));
    assert_eq!(results.table.rows[4][0], Cell::Integer(4));
}

#[test]
fn zero_diagonal_is_an_error() {
    // Passes the signed check, but can't be normalized.
    let system =
        LinearSystem::new(vec![vec![0.0, -1.0], vec![0.0, 1.0]], vec![1.0, 1.0]).unwrap();
    assert_eq!(
        gauss_seidel(&system, Config::default()),
        Err(Error::DegenerateSystem { row: 0 })
    );
    assert_eq!(
        solve(&system, Config::default()).unwrap_err().error,
        Error::DegenerateSystem { row: 0 }
    );
}

#[test]
fn sweep_cap_is_reported() {
    let config = Config::default().with_epsilon(1e-300).with_max_sweeps(3);
    let report = gauss_seidel(&sample_system(), config).unwrap();
    assert_eq!(report.sections().len(), 4);
    let results = report.section(titles::RESULT_TABLE).unwrap();
    assert_eq!(results.table.rows.len(), 4);
    let status = results.status.as_ref().unwrap();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.message, "Did not converge within 3 sweeps");
}

#[test]
fn invalid_config() {
    let config = Config::default().with_epsilon(-1.0);
    assert_eq!(
        gauss_seidel(&sample_system(), config),
        Err(Error::InvalidTolerance(-1.0))
    );
}

#[test]
fn plain_text_rendering() {
    let system = LinearSystem::new(vec![vec![2.0]], vec![4.0]).unwrap();
    let report = gauss_seidel(&system, Config::default().with_precision(Some(1))).unwrap();
    let mut sink = PlainText::default();
    report.render(&mut sink).unwrap();
    let text = sink.into_string();
    assert!(text.contains("\nLinear system\n2.0*x0 = 4.0\ncode: ok | msg: All is done!\n"));
    assert!(text.contains("\nk | x0 | delta\n0 | 0.0 | -\n1 | 2.0 | 2.0\n2 | 2.0 | 0.0\n"));
}

#[test]
fn problem_files() {
    for (case, sweeps) in [("variant", 4), ("labs", 4)] {
        let txt = std::fs::read_to_string(format!("../test_cases/{case}/problem.txt")).unwrap();
        let problem: Problem = txt.parse().unwrap();
        let outcome = problem.solve().unwrap();
        assert_eq!(outcome.iterations, sweeps, "{case}");
        assert!(!problem.report().unwrap().has_error());
    }
    let txt = std::fs::read_to_string("../test_cases/not_dominant/problem.txt").unwrap();
    let problem: Problem = txt.parse().unwrap();
    assert!(problem.report().unwrap().has_error());
}
