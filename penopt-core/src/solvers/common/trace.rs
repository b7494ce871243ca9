use std::cell::RefCell;
use std::fmt::Write;

/// One diagnostic row recorded by a solver.
#[derive(Clone, Debug)]
pub struct SolverTraceRecord {
    pub solver: &'static str,
    pub iter: usize,
    pub f: Option<f64>,
    pub grad_norm: Option<f64>,
    pub dx_norm: Option<f64>,
    pub step_size: Option<f64>,
    pub r: Option<f64>,
    pub objective: Option<f64>,
    pub note: Option<&'static str>,
}

impl SolverTraceRecord {
    fn format_line(&self) -> String {
        let mut line = format!("[{}] iter {:>6}", self.solver, self.iter);
        if let Some(v) = self.r {
            let _ = write!(line, " | r {:>9.3e}", v);
        }
        if let Some(v) = self.f {
            let _ = write!(line, " | f {:>13.6e}", v);
        }
        if let Some(v) = self.objective {
            let _ = write!(line, " | obj {:>13.6e}", v);
        }
        if let Some(v) = self.grad_norm {
            let _ = write!(line, " | grad {:>13.6e}", v);
        }
        if let Some(v) = self.dx_norm {
            let _ = write!(line, " | dx {:>13.6e}", v);
        }
        if let Some(v) = self.step_size {
            let _ = write!(line, " | step {:>+9.3e}", v);
        }
        if let Some(note) = self.note {
            let _ = write!(line, " | note {note}");
        }
        line
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct TraceRow {
    iter: usize,
    f: Option<f64>,
    grad_norm: Option<f64>,
    dx_norm: Option<f64>,
    step_size: Option<f64>,
    r: Option<f64>,
    objective: Option<f64>,
    note: Option<&'static str>,
}

impl TraceRow {
    pub(crate) fn iter(iter: usize) -> Self {
        Self {
            iter,
            f: None,
            grad_norm: None,
            dx_norm: None,
            step_size: None,
            r: None,
            objective: None,
            note: None,
        }
    }

    pub(crate) fn f(mut self, f: f64) -> Self {
        self.f = Some(f);
        self
    }

    pub(crate) fn grad_norm(mut self, grad_norm: f64) -> Self {
        self.grad_norm = Some(grad_norm);
        self
    }

    pub(crate) fn dx_norm(mut self, dx_norm: f64) -> Self {
        self.dx_norm = Some(dx_norm);
        self
    }

    pub(crate) fn step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }

    pub(crate) fn r(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }

    pub(crate) fn objective(mut self, objective: f64) -> Self {
        self.objective = Some(objective);
        self
    }

    pub(crate) fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SolverTracer {
    verbose: bool,
    solver: &'static str,
    history: Option<RefCell<Vec<SolverTraceRecord>>>,
}

impl SolverTracer {
    pub(crate) fn gd(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: None,
        }
    }

    pub(crate) fn gd_with_history(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "gd",
            history: Some(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn continuation(verbose: bool) -> Self {
        Self {
            verbose,
            solver: "continuation",
            history: None,
        }
    }

    pub(crate) fn emit(&self, row: TraceRow) {
        let record = SolverTraceRecord {
            solver: self.solver,
            iter: row.iter,
            f: row.f,
            grad_norm: row.grad_norm,
            dx_norm: row.dx_norm,
            step_size: row.step_size,
            r: row.r,
            objective: row.objective,
            note: row.note,
        };

        if let Some(history) = &self.history {
            history.borrow_mut().push(record.clone());
        }

        if self.verbose {
            println!("{}", record.format_line());
        }
    }

    pub(crate) fn into_history(self) -> Vec<SolverTraceRecord> {
        self.history
            .map(|history| history.into_inner())
            .unwrap_or_default()
    }
}
