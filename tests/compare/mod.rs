mod removed_tokens_respect_safe_kinds;
mod identical_generated_trees_produce_no_output;
mod code_page_437_bytes_are_preserved;
#[cfg(unix)]
mod dangling_links_are_skipped;
