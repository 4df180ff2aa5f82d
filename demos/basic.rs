use argonaut::FlagParser;

fn main() {
    let mut name = String::default();
    let mut age: i64 = 0;
    let mut verbose = false;

    let mut parser = FlagParser::console();
    parser
        .set_program_name("basic")
        .string_var(&mut name, "n", "name", "default", "The name of the user")
        .int_var(&mut age, "a", "age", 0, "The age of the user")
        .bool_var(&mut verbose, "v", "verbose", false, "Enable verbose output");

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = parser.parse(&tokens) {
        if !error.is_help_requested() {
            eprintln!("Error: {error}");
        }
        std::process::exit(error.exit_code());
    }

    let positionals = parser.positional_arguments().to_vec();
    drop(parser);

    println!("Name: {name}");
    println!("Age: {age}");
    println!("Verbose: {verbose}");
    println!("Positional arguments: {positionals:?}");
}
