use criterion::{criterion_group, criterion_main, Criterion};
use group_ledger::ledger::{
    calculate_balances, get_simplified_transactions, Expense, Group, Member, Settlement,
};
use group_ledger::run::{run, Report};

fn large_group(member_count: usize, expense_count: usize) -> Group {
    let mut group = Group::new("bench", "bench");
    let ids: Vec<String> = (0..member_count).map(|i| format!("m{}", i)).collect();
    for id in &ids {
        group.add_member(Member::new(id.clone(), id.clone()));
    }

    for i in 0..expense_count {
        let payer = &ids[i % member_count];
        let participants = &ids[(i * 7) % member_count..];
        let amount = 1_00 + (i as i64 * 37) % 50_000;
        group.add_expense(Expense::split_equally(
            format!("e{}", i),
            payer.clone(),
            amount,
            participants,
        ));
        if i % 10 == 0 {
            let from = &ids[(i * 3) % member_count];
            group.add_settlement(Settlement::new(
                format!("s{}", i),
                from.clone(),
                payer.clone(),
                5_00,
            ));
        }
    }

    group
}

pub fn bench_engine_50_members_10_000_expenses(c: &mut Criterion) {
    let group = large_group(50, 10_000);

    c.bench_function("engine_50_members_10_000_expenses", |b| {
        b.iter(|| {
            let balances = calculate_balances(&group);
            get_simplified_transactions(&balances, &group.members)
        })
    });
}

pub fn bench_simplify_1_000_members(c: &mut Criterion) {
    let group = large_group(1_000, 5_000);
    let balances = calculate_balances(&group);

    c.bench_function("simplify_1_000_members", |b| {
        b.iter(|| get_simplified_transactions(&balances, &group.members))
    });
}

pub fn bench_run_csv_6_000_lines(c: &mut Criterion) {
    c.bench_function("run_csv_6_000_lines", |b| {
        let data = format!(
            "type,id,member,counterpart,amount,category,description\n{}{}",
            r#"member,a,,,,,Alice
member,b,,,,,Bob
member,c,,,,,Carol
"#,
            (0..1_000)
                .map(|i| {
                    format!(
                        r#"expense,e{i},a,,12.34,food,
split,e{i},a,,,,
split,e{i},b,,,,
split,e{i},c,,,,
settlement,s{i},b,a,1.00,,
badly formatted record
"#
                    )
                })
                .collect::<String>()
        );
        let cursor = std::io::Cursor::new(data);

        b.iter(move || run(cursor.clone(), std::io::sink(), Report::Settlements))
    });
}

criterion_group!(
    benches,
    bench_engine_50_members_10_000_expenses,
    bench_simplify_1_000_members,
    bench_run_csv_6_000_lines,
);
criterion_main!(benches);
