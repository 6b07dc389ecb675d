/// Splits a stream of 32-bit words into big-endian bytes.
pub struct WordBytes<I> {
    words: I,
    bytes: [u8; 4],
    index: usize,
}

impl<I> WordBytes<I>
where
    I: Iterator<Item = u32>,
{
    pub fn new(words: I) -> Self {
        Self {
            words,
            bytes: [0; 4],
            index: 4,
        }
    }
}

impl<I> Iterator for WordBytes<I>
where
    I: Iterator<Item = u32>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > 3 {
            self.bytes.copy_from_slice(&self.words.next()?.to_be_bytes());
            self.index = 0;
        }

        let byte = self.bytes[self.index];
        self.index += 1;

        Some(byte)
    }
}
