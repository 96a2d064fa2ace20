//! Solving a system written in the textual problem format.
use gauss_seidel::textual::Problem;

fn main() {
    let problem: Problem = "\
# system
10 -1 2 | 6
-1 11 -1 | 25
2 -1 10 | -11

# config
epsilon = 1e-6
precision = 6
"
    .parse()
    .expect("problem should parse");

    let outcome = problem.solve().expect("system should converge");
    for (name, value) in &outcome.values {
        println!("{name} = {value:.6}");
    }
    println!("{} sweeps, residual {:e}", outcome.iterations, outcome.residual);
}
