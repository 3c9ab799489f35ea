pub mod file_utils;

#[cfg(test)]
pub(crate) mod test_utils;
