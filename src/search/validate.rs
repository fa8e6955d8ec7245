use crate::search::{Cost, Problem, SearchError};

const COST_TOLERANCE: f64 = 1e-9;

/// Replay `actions` from the initial state of `problem` and check that every
/// action is applicable, that the path ends in a goal state, and that it
/// costs `expected_cost`.
pub fn validate<P: Problem>(
    problem: &P,
    actions: &[P::Action],
    expected_cost: Cost,
) -> Result<(), SearchError>
where
    P::Action: PartialEq,
{
    let mut cur_state = problem.initial_state().clone();
    let mut cost = 0.;
    for (step, action) in actions.iter().enumerate() {
        if !problem.actions(&cur_state).contains(action) {
            return Err(SearchError::InapplicableAction {
                step,
                state: format!("{:?}", cur_state),
                action: format!("{:?}", action),
            });
        }
        let next_state = problem.result(&cur_state, action);
        cost += problem
            .action_cost(&cur_state, action, &next_state)?
            .into_inner();
        cur_state = next_state;
    }

    if !problem.is_goal(&cur_state) {
        return Err(SearchError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    if (cost - expected_cost.into_inner()).abs() > COST_TOLERANCE {
        return Err(SearchError::CostMismatch {
            expected: expected_cost.into_inner(),
            actual: cost,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    fn validate_path(path: &[&str], cost: f64) -> Result<(), SearchError> {
        let problem = romania_problem("A", "B");
        let actions: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        validate(&problem, &actions, OrderedFloat(cost))
    }

    #[test]
    fn validate_good_path_ok() {
        assert!(validate_path(&["S", "R", "P", "B"], 418.).is_ok());
        assert!(validate_path(&["S", "F", "B"], 450.).is_ok());
    }

    #[test]
    fn validate_bad_path_not_applicable() {
        let err = validate_path(&["S", "B"], 351.).unwrap_err();
        assert_eq!(
            err,
            SearchError::InapplicableAction {
                step: 1,
                state: "\"S\"".to_string(),
                action: "\"B\"".to_string(),
            }
        );
    }

    #[test]
    fn validate_bad_path_goal_not_reached() {
        let err = validate_path(&["S", "R"], 220.).unwrap_err();
        assert!(matches!(err, SearchError::GoalNotReached { .. }));
    }

    #[test]
    fn validate_bad_path_wrong_cost() {
        let err = validate_path(&["S", "F", "B"], 418.).unwrap_err();
        assert_eq!(
            err,
            SearchError::CostMismatch {
                expected: 418.,
                actual: 450.,
            }
        );
    }

    #[test]
    fn validate_empty_path_at_goal() {
        let problem = romania_problem("B", "B");
        assert!(validate(&problem, &[], OrderedFloat(0.)).is_ok());
    }
}
