//! Printable ASCII wordlist filter

use wordlist_utils::Tool;

fn main() {
    wordlist_utils::cli::main(Tool::AsciiFilter);
}
