use bipartite_matching::{BipartiteMatcher, Matching, MatchingInstance};
use rstest::rstest;

const EXAMPLE: &str = "4\nA\nB\nX\nY\n3\n1 3\n2 3\n2 4\n";

fn solve(input: &str) -> Matching {
    let instance = MatchingInstance::parse(input).unwrap();
    let mut matcher = BipartiteMatcher::from_instance(instance).unwrap();
    matcher.solve().unwrap()
}

#[rstest]
#[case::worked_example(EXAMPLE, 2)]
#[case::edges_reversed("4\nA\nB\nX\nY\n3\n2 4\n2 3\n1 3\n", 2)]
#[case::edges_shuffled("4\nA\nB\nX\nY\n3\n2 3\n1 3\n2 4\n", 2)]
#[case::single_pair("2\nL\nR\n1\n1 2\n", 1)]
#[case::contention_forces_rerouting("4\nA\nB\nX\nY\n3\n1 3\n1 4\n2 3\n", 2)]
#[case::complete_k33(
    "6\na\nb\nc\nd\ne\nf\n9\n1 4\n1 5\n1 6\n2 4\n2 5\n2 6\n3 4\n3 5\n3 6\n",
    3
)]
#[case::isolated_left_node("4\nA\nB\nX\nY\n2\n2 3\n2 4\n", 1)]
fn maximum_matching_size(#[case] input: &str, #[case] expected: usize) {
    assert_eq!(solve(input).len(), expected);
}

#[test]
fn worked_example_matches_by_name() {
    let instance = MatchingInstance::parse(EXAMPLE).unwrap();
    let mut matcher = BipartiteMatcher::from_instance(instance).unwrap();
    let matching = matcher.solve().unwrap();

    let instance = matcher.instance();
    let names: Vec<(&str, &str)> = matching
        .pairs
        .iter()
        .map(|&(left, right)| (instance.name(left), instance.name(right)))
        .collect();
    assert_eq!(names, vec![("A", "X"), ("B", "Y")]);
}

#[test]
fn matching_is_deterministic_across_runs() {
    let first = solve(EXAMPLE);
    let second = solve(EXAMPLE);
    assert_eq!(first, second);
}

#[test]
fn edge_order_does_not_change_the_matching_size() {
    // every permutation of the worked example's three edges
    let orders = [
        ["1 3", "2 3", "2 4"],
        ["1 3", "2 4", "2 3"],
        ["2 3", "1 3", "2 4"],
        ["2 3", "2 4", "1 3"],
        ["2 4", "1 3", "2 3"],
        ["2 4", "2 3", "1 3"],
    ];
    for order in orders {
        let input = format!("4\nA\nB\nX\nY\n3\n{}\n{}\n{}\n", order[0], order[1], order[2]);
        assert_eq!(solve(&input).len(), 2, "order: {order:?}");
    }
}

#[test]
fn reads_an_instance_from_a_file() {
    let path = std::env::temp_dir().join("bipartite_matching_worked_example.txt");
    std::fs::write(&path, EXAMPLE).unwrap();
    let mut matcher = BipartiteMatcher::from_path(&path).unwrap();
    assert_eq!(matcher.solve().unwrap().len(), 2);
    std::fs::remove_file(&path).ok();
}
