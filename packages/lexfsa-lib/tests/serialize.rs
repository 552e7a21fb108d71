use lexfsa_lib::automaton::fsa::Fsa;

fn three_state_cycle() -> Fsa<char> {
    let mut fsa = Fsa::new();
    let q0 = fsa.add_state();
    let q1 = fsa.add_transition(q0, 'a', None, false);
    let q2 = fsa.add_transition(q1, 'b', None, true);
    fsa.add_transition(q2, 'a', Some(q0), false);
    fsa
}

#[test]
fn att_lists_start_state_arcs_first() {
    let fsa = three_state_cycle();

    let att = fsa.to_att();
    let lines: Vec<&str> = att.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "0\t1\ta");
    assert!(lines.contains(&"1\t2\tb"));
    assert!(lines.contains(&"2\t0\ta"));
    // one bare line per accepting state, after the arcs
    assert_eq!(lines[3], "2");
}

#[test]
fn graphviz_marks_start_and_accepting_states() {
    let fsa = three_state_cycle();

    let dot = fsa.to_graphviz();

    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("rankdir = LR;"));
    assert!(dot.contains("start [style=invis];"));
    assert!(dot.contains("node [shape=circle];"));
    assert!(dot.contains("start -> 0;"));
    assert!(dot.contains("0 -> 1 [label=\"a\"];"));
    assert!(dot.contains("1 -> 2 [label=\"b\"];"));
    assert!(dot.contains("2 [shape=doublecircle];"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn empty_automaton_serializes_to_the_bare_skeleton() {
    let fsa = Fsa::<char>::new();

    assert!(fsa.to_att().is_empty());

    let dot = fsa.to_graphviz();
    assert!(dot.contains("start [style=invis];"));
    assert!(!dot.contains("->"));
}
