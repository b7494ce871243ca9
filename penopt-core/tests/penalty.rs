use proptest::prelude::*;

use penopt::problems::{
    box_volume::BoxVolume, constrained::ConstrainedProblem, objective::Objective,
    penalty::QuadraticPenalty,
};

#[test]
fn penalty_matches_hand_computed_values() {
    let problem = BoxVolume;

    // feasible direction but violated surface budget:
    // f = -1, g = 2*3 - 1 = 5, no inequality active
    let p = QuadraticPenalty::new(&problem, 10.0);
    assert!((p.value(&vec![1.0, 1.0, 1.0]) - 1.5).abs() < 1e-12);

    // one negative edge: f = 1, g = -3, h = (1, -1, -1)
    let p = QuadraticPenalty::new(&problem, 1.0);
    assert!((p.value(&vec![-1.0, 1.0, 1.0]) - 11.0).abs() < 1e-12);
}

#[test]
fn feasible_gradient_has_no_inequality_term() {
    // all edges strictly positive: only the objective and the equality
    // residual contribute, with per-coordinate term 4*g*(x_j + x_k)/r
    let problem = BoxVolume;
    let r = 0.5;
    let p = QuadraticPenalty::new(&problem, r);

    let x = vec![0.5, 0.4, 0.3];
    let g = 2.0 * (x[0] * x[1] + x[1] * x[2] + x[0] * x[2]) - 1.0;

    let mut grad = vec![0.0; 3];
    p.gradient(&x, &mut grad);

    let expected = [
        -x[1] * x[2] + 4.0 * g * (x[1] + x[2]) / r,
        -x[0] * x[2] + 4.0 * g * (x[0] + x[2]) / r,
        -x[0] * x[1] + 4.0 * g * (x[0] + x[1]) / r,
    ];
    for (got, want) in grad.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn violated_inequality_pushes_coordinate_positive() {
    // x1 < 0: h_1 = -x1 > 0 contributes -2*h_1/r to coordinate 1, a
    // negative gradient component, so the descent step increases x1
    let problem = BoxVolume;
    let r = 1.0;
    let p = QuadraticPenalty::new(&problem, r);

    let x = vec![-0.3, 0.0, 0.0];
    let mut grad = vec![0.0; 3];
    p.gradient(&x, &mut grad);

    let g = 2.0 * (x[0] * x[1] + x[1] * x[2] + x[0] * x[2]) - 1.0;
    let expected_x1 = -x[1] * x[2] + 4.0 * g * (x[1] + x[2]) / r - 2.0 * (-x[0]) / r;
    assert!((grad[0] - expected_x1).abs() < 1e-12);
    assert!(grad[0] < 0.0);
}

#[test]
fn gradient_matches_finite_differences() {
    let problem = BoxVolume;
    let points = [
        (vec![0.8, 0.5, 0.3], 0.5),
        // negative coordinate exercises the violated-inequality branch
        (vec![-0.2, 0.4, 0.3], 1.0),
    ];

    for (x, r) in points {
        let p = QuadraticPenalty::new(&problem, r);
        let mut grad = vec![0.0; 3];
        p.gradient(&x, &mut grad);

        let h = 1e-6;
        for j in 0..3 {
            let mut xp = x.clone();
            let mut xm = x.clone();
            xp[j] += h;
            xm[j] -= h;
            let fd = (p.value(&xp) - p.value(&xm)) / (2.0 * h);
            assert!(
                (grad[j] - fd).abs() < 1e-6,
                "coordinate {j} at r={r}: analytic {} vs fd {fd}",
                grad[j]
            );
        }
    }
}

#[test]
fn gradient_vanishes_at_origin() {
    // every term is zero there: the objective gradient, the equality chain
    // rule (∇g = 0), and the inactive inequalities
    let problem = BoxVolume;
    let p = QuadraticPenalty::new(&problem, 10.0);

    let mut grad = vec![1.0; 3];
    p.gradient(&vec![0.0, 0.0, 0.0], &mut grad);
    assert_eq!(grad, vec![0.0, 0.0, 0.0]);
}

proptest! {
    #[test]
    fn objective_is_negated_edge_product(
        x1 in -10.0f64..10.0,
        x2 in -10.0f64..10.0,
        x3 in -10.0f64..10.0,
    ) {
        let x = [x1, x2, x3];
        prop_assert_eq!(-BoxVolume.objective(&x), x1 * x2 * x3);
    }

    #[test]
    fn penalty_never_undercuts_objective(
        x1 in -5.0f64..5.0,
        x2 in -5.0f64..5.0,
        x3 in -5.0f64..5.0,
        r in 0.01f64..100.0,
    ) {
        let problem = BoxVolume;
        let p = QuadraticPenalty::new(&problem, r);
        let x = vec![x1, x2, x3];
        prop_assert!(p.value(&x) >= problem.objective(&x));
    }

    #[test]
    fn penalty_reduces_to_objective_on_feasible_surface(
        s in 0.05f64..0.7,
        r in 0.01f64..100.0,
    ) {
        // x1 = x2 = s and x3 chosen to close the surface budget exactly
        let x3 = (1.0 - 2.0 * s * s) / (4.0 * s);
        prop_assume!(x3 >= 0.0);

        let problem = BoxVolume;
        let p = QuadraticPenalty::new(&problem, r);
        let x = vec![s, s, x3];

        let f = problem.objective(&x);
        prop_assert!((p.value(&x) - f).abs() <= 1e-9 * f.abs().max(1.0));
    }
}
