use clasp::{CommandLine, Parameter, PositionalMultiArg, SwitchArg};

fn main() {
    let mut cl = CommandLine::builder("Sums the items.")
        .version("0.3.0")
        .build();
    let verbose = SwitchArg::new(
        Parameter::labeled("v", "verbose").help("Print each item."),
        false,
    )
    .expect("valid declaration");
    let items = PositionalMultiArg::<u32>::new(
        Parameter::positional("item").help("The items to sum.").required(),
        "u32",
    )
    .expect("valid declaration");
    cl.add(&verbose).expect("unique argument");
    cl.add(&items).expect("unique argument");

    cl.parse_env().expect("errors are handled by the command line");

    if verbose.value() {
        for item in items.values() {
            println!("{item}");
        }
    }

    let sum: u32 = items.values().iter().sum();
    println!("Sum: {sum}");
}
