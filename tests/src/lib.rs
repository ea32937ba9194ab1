#![cfg(test)]

mod showcase;
