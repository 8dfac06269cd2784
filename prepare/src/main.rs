use std::fs::File;

use ansel_composing_prepare::output;

fn main()
{
    output::write_compositions(&mut File::create("./../data/compositions.txt").unwrap());
    output::write_combining_marks(&mut File::create("./../data/combining_marks.txt").unwrap());
}
