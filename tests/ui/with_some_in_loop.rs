//! `with_some!` branches may use `break`, `continue` and `return`.

use optkit::gate::{Opt, none, some};
use optkit::with_some;

fn first_complete(rows: &[(Opt<&str>, Opt<u32>)]) -> Opt<String> {
    let mut index = 0;
    loop {
        if index == rows.len() {
            break none();
        }
        let (name, age) = rows[index];
        index += 1;
        with_some!(
            [name, age],
            some [name, age] => return some(format!("{name} ({age})")),
            none => continue,
        );
    }
}

fn main() {
    let rows = [(some("ada"), none()), (some("grace"), some(45))];
    assert_eq!(first_complete(&rows), some("grace (45)".to_string()));
    assert_eq!(first_complete(&[]), Opt::Absent);
}
