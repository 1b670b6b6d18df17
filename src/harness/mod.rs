//! Named pass/fail cases and a runner that reports them line by line.

use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;

mod suite;
pub use suite::*;

use crate::shared::{Coordinate, haversine};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub struct Case {
    name: String,
    check: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Case {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    /// Passes when the distance from `from` to `to` is strictly within
    /// `tolerance_km` of `expected_km`.
    pub fn within(
        name: impl Into<String>,
        from: Coordinate,
        to: Coordinate,
        expected_km: f64,
        tolerance_km: f64,
    ) -> Self {
        Self::new(name, move || {
            let actual = haversine(&from, &to).as_kilometers();
            (actual - expected_km).abs() < tolerance_km
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(&self) -> bool {
        (self.check)()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub passed: usize,
    pub total: usize,
}

impl Report {
    pub const fn is_success(&self) -> bool {
        self.passed == self.total
    }

    pub const fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

#[derive(Default)]
pub struct Suite {
    cases: Vec<Case>,
}

impl Suite {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs every case in declaration order, writing the report to `out`.
    /// A failing case never stops the ones after it.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Report, self::Error> {
        writeln!(out, "Running distance calculation tests...")?;

        let mut passed = 0;
        for (i, case) in self.cases.iter().enumerate() {
            write!(out, "Test {}: {}... ", i + 1, case.name)?;
            let ok = case.run();
            debug!("Case {:?} {}", case.name, if ok { "passed" } else { "failed" });
            if ok {
                writeln!(out, "PASS")?;
                passed += 1;
            } else {
                writeln!(out, "FAIL")?;
            }
        }

        let report = Report {
            passed,
            total: self.cases.len(),
        };
        writeln!(out)?;
        writeln!(
            out,
            "Results: {}/{} tests passed",
            report.passed, report.total
        )?;
        if report.is_success() {
            writeln!(out, "✅ All distance tests passed!")?;
        } else {
            writeln!(out, "❌ Some distance tests failed!")?;
        }
        out.flush()?;

        debug!("{}/{} cases passed", report.passed, report.total);
        Ok(report)
    }
}
