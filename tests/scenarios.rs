use group_ledger::ledger::{
    calculate_balances, get_simplified_transactions, Amount, Expense, Group, Member,
    ParticipantSplit, Settlement,
};

fn group(ids: &[&str]) -> Group {
    let mut group = Group::new("g", "group");
    for id in ids {
        group.add_member(Member::new(*id, id.to_uppercase()));
    }
    group
}

fn balances_of(group: &Group) -> Vec<(String, Amount)> {
    calculate_balances(group)
        .into_iter()
        .map(|b| (b.member_id, b.balance))
        .collect()
}

fn plan_of(group: &Group) -> Vec<(String, String, Amount)> {
    let balances = calculate_balances(group);
    get_simplified_transactions(&balances, &group.members)
        .into_iter()
        .map(|tx| (tx.from.id, tx.to.id, tx.amount))
        .collect()
}

fn owned(items: &[(&str, Amount)]) -> Vec<(String, Amount)> {
    items.iter().map(|(id, v)| (id.to_string(), *v)).collect()
}

#[test]
fn one_payer_four_way_split() {
    let mut group = group(&["a", "b", "c", "d"]);
    group.add_expense(Expense::split_equally(
        "dinner",
        "a",
        400_00,
        &["a", "b", "c", "d"].map(String::from),
    ));

    assert_eq!(
        owned(&[("a", 300_00), ("b", -100_00), ("c", -100_00), ("d", -100_00)]),
        balances_of(&group)
    );

    let plan = plan_of(&group);
    assert_eq!(3, plan.len());
    for (from, to, amount) in &plan {
        assert!(["b", "c", "d"].contains(&from.as_str()));
        assert_eq!("a", to.as_str());
        assert_eq!(100_00, *amount);
    }
}

#[test]
fn settlement_discharges_debt() {
    let mut group = group(&["a", "b"]);
    group.add_expense(Expense::new(
        "taxi",
        "a",
        50_00,
        vec![ParticipantSplit::new("b", 50_00)],
    ));
    assert_eq!(owned(&[("a", 50_00), ("b", -50_00)]), balances_of(&group));

    group.add_settlement(Settlement::new("s1", "b", "a", 50_00));
    assert_eq!(owned(&[("a", 0), ("b", 0)]), balances_of(&group));
    assert!(plan_of(&group).is_empty());
}

#[test]
fn chained_debts_net_out() {
    let mut group = group(&["a", "b", "c"]);
    // b paid for a, c paid for b.
    group.add_expense(Expense::new(
        "e1",
        "b",
        10_00,
        vec![ParticipantSplit::new("a", 10_00)],
    ));
    group.add_expense(Expense::new(
        "e2",
        "c",
        10_00,
        vec![ParticipantSplit::new("b", 10_00)],
    ));

    assert_eq!(
        owned(&[("a", -10_00), ("b", 0), ("c", 10_00)]),
        balances_of(&group)
    );
    assert_eq!(
        vec![("a".to_string(), "c".to_string(), 10_00)],
        plan_of(&group)
    );
}

#[test]
fn settling_the_whole_plan_settles_everybody() {
    let mut group = group(&["a", "b", "c", "d", "e"]);
    let everybody = ["a", "b", "c", "d", "e"].map(String::from);
    group.add_expense(Expense::split_equally("e1", "a", 123_45, &everybody));
    group.add_expense(Expense::split_equally("e2", "c", 67_89, &everybody[1..]));
    group.add_expense(Expense::new(
        "e3",
        "e",
        30_00,
        vec![ParticipantSplit::new("b", 20_00), ParticipantSplit::new("d", 10_00)],
    ));

    let balances = calculate_balances(&group);
    let plan = get_simplified_transactions(&balances, &group.members);
    assert!(!plan.is_empty());

    for (i, tx) in plan.iter().enumerate() {
        group.settle(format!("s{}", i), tx);
    }

    assert!(calculate_balances(&group).iter().all(|b| b.balance == 0));
    assert!(plan_of(&group).is_empty());
}

#[test]
fn editing_and_deleting_expenses_is_reflected() {
    let mut group = group(&["a", "b"]);
    group.add_expense(Expense::new(
        "e1",
        "a",
        100,
        vec![ParticipantSplit::new("b", 100)],
    ));

    group.replace_expense(Expense::new(
        "e1",
        "a",
        60,
        vec![ParticipantSplit::new("b", 60)],
    ));
    assert_eq!(owned(&[("a", 60), ("b", -60)]), balances_of(&group));

    group.remove_expense("e1");
    assert_eq!(owned(&[("a", 0), ("b", 0)]), balances_of(&group));
}

#[test]
fn empty_group() {
    let group = Group::default();
    assert!(calculate_balances(&group).is_empty());
    assert!(plan_of(&group).is_empty());
}
