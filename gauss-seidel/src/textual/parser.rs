use super::{Equation, Problem, Setting};
use winnow::{
    Result as WResult,
    ascii::{digit1, multispace0, newline, space0, space1},
    combinator::{alt, delimited, eof, opt, separated},
    prelude::*,
};

/// Parse a whole problem file: a `# system` section, then an optional `# config` section.
pub fn parse_problem(i: &mut &str) -> WResult<Problem> {
    multispace0.parse_next(i)?;
    system_header.parse_next(i)?;
    let equations: Vec<_> = separated(1.., Equation::parse, newline).parse_next(i)?;
    multispace0.parse_next(i)?;
    let settings = opt(config_section).parse_next(i)?.unwrap_or_default();
    multispace0.parse_next(i)?;
    eof.parse_next(i)?;
    Ok(Problem {
        equations,
        settings,
    })
}

fn system_header(i: &mut &str) -> WResult<()> {
    ('#', ws, "system", ws, newline).map(|_| ()).parse_next(i)
}

fn config_header(i: &mut &str) -> WResult<()> {
    ('#', ws, "config", ws, newline).map(|_| ()).parse_next(i)
}

fn config_section(i: &mut &str) -> WResult<Vec<Setting>> {
    config_header.parse_next(i)?;
    separated(0.., Setting::parse, newline).parse_next(i)
}

impl Equation {
    // 3.857 0.239 0.272 | 0.19
    fn parse(i: &mut &str) -> WResult<Self> {
        ignore_ws(i);
        let coefficients: Vec<f64> = separated(1.., parse_number, space1).parse_next(i)?;
        (ws, '|', ws).parse_next(i)?;
        let rhs = parse_number(i)?;
        ignore_ws(i);
        Ok(Self { coefficients, rhs })
    }
}

impl Setting {
    fn parse(i: &mut &str) -> WResult<Self> {
        ignore_ws(i);
        let setting = alt((
            ("epsilon", equals, parse_number).map(|(_, _, epsilon)| Setting::Epsilon(epsilon)),
            ("precision", equals, parse_precision)
                .map(|(_, _, precision)| Setting::Precision(precision)),
            ("max_sweeps", equals, parse_usize).map(|(_, _, n)| Setting::MaxSweeps(n)),
        ))
        .parse_next(i)?;
        ignore_ws(i);
        Ok(setting)
    }
}

fn equals(i: &mut &str) -> WResult<()> {
    delimited(space0, '=', space0).map(|_| ()).parse_next(i)
}

fn parse_precision(i: &mut &str) -> WResult<Option<usize>> {
    alt(("auto".map(|_| None), parse_usize.map(Some))).parse_next(i)
}

fn parse_usize(i: &mut &str) -> WResult<usize> {
    digit1
        .verify_map(|s: &str| s.parse::<usize>().ok())
        .parse_next(i)
}

fn parse_number(i: &mut &str) -> WResult<f64> {
    winnow::ascii::float.parse_next(i)
}

fn ws(i: &mut &str) -> WResult<()> {
    space0.parse_next(i).map(|_| ())
}

fn ignore_ws(i: &mut &str) {
    let _ = ws.parse_next(i);
}
