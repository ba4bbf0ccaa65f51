use clasp::{
    CommandLine, MultiSwitchArg, MultiValueArg, Parameter, PositionalArg, PositionalMultiArg,
    SwitchArg, ValueArg, Values,
};

fn main() {
    let mut cl = CommandLine::builder("Bundles files into an archive.")
        .delimiter('=')
        .version("1.4.2")
        .build();

    let create = SwitchArg::new(
        Parameter::labeled("c", "create").help("Create a new archive."),
        false,
    )
    .expect("valid declaration");
    let extract = SwitchArg::new(
        Parameter::labeled("x", "extract").help("Extract an existing archive."),
        false,
    )
    .expect("valid declaration");
    let list = SwitchArg::new(
        Parameter::labeled("t", "list").help("List the archive contents."),
        false,
    )
    .expect("valid declaration");
    let verbosity = MultiSwitchArg::new(
        Parameter::labeled("v", "verbose").help("Increase the verbosity."),
        0,
    )
    .expect("valid declaration");
    let compression = ValueArg::constrained(
        Parameter::labeled("z", "compression").help("The compression codec."),
        "none".to_string(),
        Values::new(vec![
            "none".to_string(),
            "gzip".to_string(),
            "zstd".to_string(),
        ]),
    )
    .expect("valid declaration");
    let excludes = MultiValueArg::<String>::new(
        Parameter::labeled("e", "exclude").help("Skip files matching the pattern."),
        "pattern",
    )
    .expect("valid declaration");
    let archive = PositionalArg::new(
        Parameter::positional("archive")
            .help("The archive file.")
            .required(),
        String::default(),
        "file",
    )
    .expect("valid declaration");
    let files = PositionalMultiArg::<String>::new(
        Parameter::positional("files").help("The files to bundle."),
        "file",
    )
    .expect("valid declaration");

    cl.xor_add(&[&create, &extract, &list])
        .expect("unique arguments");
    cl.add(&verbosity).expect("unique argument");
    cl.add(&compression).expect("unique argument");
    cl.add(&excludes).expect("unique argument");
    cl.add(&archive).expect("unique argument");
    cl.add(&files).expect("unique argument");

    cl.parse_env().expect("errors are handled by the command line");

    let mode = if create.value() {
        "create"
    } else if extract.value() {
        "extract"
    } else {
        "list"
    };
    println!("mode: {mode}");
    println!("archive: {}", archive.value());
    println!("compression: {}", compression.value());
    println!("verbosity: {}", verbosity.count());
    println!("excludes: {:?}", excludes.values());
    println!("files: {:?}", files.values());
}
