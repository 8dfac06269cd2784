use std::fmt::UpperHex;

/// представить массив чисел в текстовом виде
pub fn format_num_vec<T: UpperHex + Into<u64> + Copy>(input: &[T], per_line: usize) -> String
{
    let mut output = String::new();

    for (i, &e) in input.iter().enumerate() {
        match i % per_line == 0 {
            true => output.push_str("\n    "),
            false => output.push(' '),
        }

        let e_str = match e.into() == 0 {
            true => "0,".to_owned(),
            false => format!("0x{:X},", e),
        };

        output.push_str(e_str.as_str());
    }

    output.push('\n');

    output
}
