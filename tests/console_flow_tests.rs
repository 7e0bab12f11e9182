use shopping_list::api::{ShoppingListConfig, bootstrap};
use shopping_list::console::{Command, Outcome, execute};
use shopping_list::render::WriterSink;

fn run_lines(lines: &[&str]) -> String {
    let config = ShoppingListConfig::default().with_sample_items(false);
    let mut controller = bootstrap(WriterSink::new(Vec::new()), &config).expect("bootstrap");

    for line in lines {
        let Some(command) = Command::parse(line).expect("parse") else {
            continue;
        };
        if execute(command, &mut controller).expect("execute") == Outcome::Quit {
            break;
        }
    }

    String::from_utf8(controller.into_sink().into_inner()).expect("utf8")
}

#[test]
fn console_session_streams_each_redraw() {
    let output = run_lines(&["add Eggs 12 4.5", "", "add Oat Milk 1 abc", "remove 1", "quit", "clear"]);

    assert_eq!(
        output,
        "Total Items: 0\n\
         \n\
         - Eggs (Quantity: 12, Price: $4.5)\n\
         Total Items: 1\n\
         \n\
         - Eggs (Quantity: 12, Price: $4.5)\n\
         - Oat Milk (Quantity: 1, Price: $NaN)\n\
         Total Items: 2\n\
         \n\
         - Oat Milk (Quantity: 1, Price: $NaN)\n\
         Total Items: 1\n"
    );
}
