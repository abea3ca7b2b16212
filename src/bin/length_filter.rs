//! Maximum length wordlist filter

use wordlist_utils::Tool;

fn main() {
    wordlist_utils::cli::main(Tool::LengthFilter);
}
