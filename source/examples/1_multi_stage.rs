use std::collections::HashMap;

use ansel_composing_source::COMPOSITION_PAIRS;

/// многоступенчатая композиция: базовым символом пары может быть кодпоинт,
/// который сам является результатом композиции (вьетнамские буквы с двумя знаками)
fn main()
{
    let pairs: &HashMap<u32, HashMap<u32, u32>> = &COMPOSITION_PAIRS;

    let mut composed: Vec<u32> = Vec::new();

    for bases in pairs.values() {
        for value in bases.values() {
            if !composed.contains(value) {
                composed.push(*value);
            }
        }
    }

    composed.sort();

    let mut found = 0;

    let mut marks: Vec<u32> = pairs.keys().copied().collect();
    marks.sort();

    for mark in marks.iter() {
        let mut bases: Vec<u32> = pairs[mark].keys().copied().collect();
        bases.sort();

        for base in bases.iter() {
            if composed.contains(base) {
                println!("{:04X} + {:04X} -> {:04X}", mark, base, pairs[mark][base]);
                found += 1;
            }
        }
    }

    println!("ступенчатых пар: {}", found);
}
