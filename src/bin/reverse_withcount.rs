//! Expands uniq -c output into repeated lines

use wordlist_utils::Tool;

fn main() {
    wordlist_utils::cli::main(Tool::ReverseWithcount);
}
