use std::fs::File;
use std::io::Write;

use crate::tables::{COMBINING_MARKS_TABLE, COMPOSITION_TABLE_MARKS, COMPOSITION_TABLE_PAIRS};

use self::format::format_num_vec;

mod format;
mod stats;

/// количество значений в строке файла с подготовленными данными
const MARKS_PER_LINE: usize = 6;
const PAIRS_PER_LINE: usize = 8;
const CODES_PER_LINE: usize = 8;

/// пишем таблицу композиций
pub fn write_compositions(file: &mut File)
{
    let output = format!(
        "CompositionData {{\n  \
            marks: &[{}  ],\n  \
            pairs: &[{}  ],\n\
        }}\n",
        format_num_vec(COMPOSITION_TABLE_MARKS.as_slice(), MARKS_PER_LINE),
        format_num_vec(COMPOSITION_TABLE_PAIRS.as_slice(), PAIRS_PER_LINE),
    );

    write!(file, "{}", output).unwrap();

    stats::print_compositions(
        COMPOSITION_TABLE_MARKS.as_slice(),
        COMPOSITION_TABLE_PAIRS.as_slice(),
    );
}

/// пишем список знаков классификатора
pub fn write_combining_marks(file: &mut File)
{
    let output = format!(
        "CombiningMarksData {{\n  \
            codes: &[{}  ],\n\
        }}\n",
        format_num_vec(COMBINING_MARKS_TABLE.as_slice(), CODES_PER_LINE),
    );

    write!(file, "{}", output).unwrap();

    stats::print_combining_marks(COMBINING_MARKS_TABLE.as_slice());
}
