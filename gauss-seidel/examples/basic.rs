//! A basic example for how to use the solver.
use gauss_seidel::{Config, LinearSystem, PlainText, solve};

fn main() {
    // Define the system.
    // 4x + y = 8
    // 2x + 5y = 10
    let system = LinearSystem::new(vec![vec![4.0, 1.0], vec![2.0, 5.0]], vec![8.0, 10.0])
        .expect("system should be square");

    // Run the solver!
    let outcome = solve(&system, Config::default().with_epsilon(1e-6));

    // Check the outcome.
    match outcome {
        Ok(solution) => {
            println!("Solved in {} sweeps", solution.iterations());
            for (i, x) in solution.solution().iter().enumerate() {
                println!("x{i} = {x}");
            }
        }
        Err(e) => {
            eprintln!("could not solve this system: {}", e.error);
        }
    }

    // Or get the whole derivation.
    let report = gauss_seidel::gauss_seidel(&system, Config::default()).expect("valid config");
    let mut sink = PlainText::default();
    report.render(&mut sink).expect("infallible");
    println!("{}", sink.into_string());
}
