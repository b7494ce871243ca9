use crate::manifolds::space::Space;
use crate::problems::objective::Objective;
use crate::solvers::common::trace::{SolverTracer, TraceRow};

use super::types::{GradientDescent, OptimizeResult};

impl<S: Space> GradientDescent<S> {
    fn make_tracer(&self) -> SolverTracer {
        if self.collect_trace {
            SolverTracer::gd_with_history(self.verbose)
        } else {
            SolverTracer::gd(self.verbose)
        }
    }

    fn attach_trace(
        &self,
        mut result: OptimizeResult<S::Point>,
        trace: SolverTracer,
    ) -> OptimizeResult<S::Point> {
        result.trace = if self.collect_trace {
            Some(trace.into_history())
        } else {
            None
        };
        result
    }

    fn run_with_fn<F, G>(
        &self,
        mut x: S::Point,
        mut value_fn: F,
        mut grad_fn: G,
        trace: &SolverTracer,
    ) -> OptimizeResult<S::Point>
    where
        F: FnMut(&S::Point) -> f64,
        G: FnMut(&S::Point, &mut S::Tangent),
    {
        let mut grad = self.space.zero_tangent_like(&x);
        // Pre-allocate buffers to avoid repeated allocations.
        let mut direction = self.space.zero_tangent_like(&x);
        let mut x_next = self.space.zero_like(&x);
        let mut dx = self.space.zero_tangent_like(&x);
        let mut tmp = self.space.zero_tangent_like(&x); // for retract_into

        let mut iters = 0;
        let mut func_evals = 0;
        let mut dx_norm = 0.0;

        for _ in 0..self.max_iters {
            grad_fn(&x, &mut grad);
            func_evals += 1;

            let grad_norm = self.space.tangent_norm(&grad);
            if self.verbose || self.collect_trace {
                trace.emit(
                    TraceRow::iter(iters)
                        .f(value_fn(&x))
                        .grad_norm(grad_norm)
                        .step_size(self.step_size),
                );
            }
            if grad_norm < self.tol {
                let f = value_fn(&x);
                trace.emit(
                    TraceRow::iter(iters)
                        .f(f)
                        .grad_norm(grad_norm)
                        .note("gradient below tolerance"),
                );
                return OptimizeResult {
                    x,
                    f,
                    iters,
                    func_evals,
                    grad_norm,
                    dx_norm: 0.0,
                    converged: true,
                    trace: None,
                };
            }

            // direction = -grad
            self.space.scale_into(&mut direction, &grad, -1.0);

            // candidate x_next = Retr_x(step_size * direction)
            self.space
                .retract_into(&mut x_next, &x, &direction, self.step_size, &mut tmp);

            self.space.difference_into(&mut dx, &x, &x_next);
            dx_norm = self.space.tangent_norm(&dx);
            if dx_norm < self.tol {
                // candidate discarded; report the pre-step point
                let f = value_fn(&x);
                trace.emit(
                    TraceRow::iter(iters)
                        .f(f)
                        .grad_norm(grad_norm)
                        .dx_norm(dx_norm)
                        .note("step below tolerance"),
                );
                return OptimizeResult {
                    x,
                    f,
                    iters,
                    func_evals,
                    grad_norm,
                    dx_norm,
                    converged: true,
                    trace: None,
                };
            }

            // x <- x_next
            std::mem::swap(&mut x, &mut x_next);
            iters += 1;
        }

        let f = value_fn(&x);
        let grad_norm = self.space.tangent_norm(&grad);
        OptimizeResult {
            x,
            f,
            iters,
            func_evals,
            grad_norm,
            dx_norm,
            converged: false,
            trace: None,
        }
    }

    pub fn minimize<O>(&self, obj: &O, x: S::Point) -> OptimizeResult<S::Point>
    where
        O: Objective<S>,
    {
        let trace = self.make_tracer();
        let result = self.run_with_fn(x, |p| obj.value(p), |p, g| obj.gradient(p, g), &trace);
        self.attach_trace(result, trace)
    }

    /// Minimize using user-provided value and gradient functions.
    pub fn minimize_with_fn<F, G>(
        &self,
        x: S::Point,
        value_fn: F,
        grad_fn: G,
    ) -> OptimizeResult<S::Point>
    where
        F: Fn(&S::Point) -> f64,
        G: Fn(&S::Point, &mut S::Tangent),
    {
        let trace = self.make_tracer();
        let result = self.run_with_fn(x, |p| value_fn(p), |p, g| grad_fn(p, g), &trace);
        self.attach_trace(result, trace)
    }
}
