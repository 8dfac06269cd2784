use std::collections::HashMap;

use ansel_composing_source::{COMBINING_MARKS, COMPOSITION_PAIRS};

/// статистика таблицы пар: сколько базовых символов у каждого знака,
/// какие знаки классификатора не комбинируются ни с чем
fn main()
{
    let pairs: &HashMap<u32, HashMap<u32, u32>> = &COMPOSITION_PAIRS;

    let mut marks: Vec<u32> = pairs.keys().copied().collect();
    marks.sort();

    let mut total = 0;

    for mark in marks.iter() {
        let bases = &pairs[mark];
        total += bases.len();

        let max = bases.values().max().unwrap();

        println!("{:04X}: {:2} пар, максимум {:04X}", mark, bases.len(), max);
    }

    println!("знаков: {}, пар: {}", marks.len(), total);

    // знаки, у которых нет таблицы пар

    print!("не комбинируются: ");
    for code in COMBINING_MARKS.iter() {
        if !pairs.contains_key(code) {
            print!("{:04X} ", code);
        }
    }
    println!();

    // знаки таблицы, отсутствующие в классификаторе

    print!("вне классификатора: ");
    for mark in marks.iter() {
        if !COMBINING_MARKS.contains(mark) {
            print!("{:04X} ", mark);
        }
    }
    println!();
}
