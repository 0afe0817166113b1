//! Mock I2C implementation for testing

use crate::platform::{traits::I2cInterface, PlatformError, Result};
use core::cell::RefCell;
use std::vec::Vec;

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification and allows
/// pre-programming read data and bus failures.
///
/// Read data is consumed front to back across transactions; once it runs
/// out, reads return zeros.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    error: Option<PlatformError>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new() -> Self {
        Self::default()
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        *self.read_data.borrow_mut() = data.to_vec();
    }

    /// Append data to return for read operations
    pub fn push_read_data(&mut self, data: &[u8]) {
        self.read_data.borrow_mut().extend_from_slice(data);
    }

    /// Make every following transaction fail with `error` (`None` clears it)
    ///
    /// Failed transactions are still recorded.
    pub fn set_error(&mut self, error: Option<PlatformError>) {
        self.error = error;
    }

    fn fill(&self, buffer: &mut [u8]) {
        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        buffer[to_read..].fill(0);
        read_data.drain(..to_read);
    }

    fn check(&self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        self.check()
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.transactions
            .borrow_mut()
            .push(I2cTransaction::WriteRead {
                addr,
                write_data: write_data.to_vec(),
                read_len: read_buffer.len(),
            });
        self.check()?;
        self.fill(read_buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::I2cError;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new();
        i2c.write(0x68, &[0x6B, 0x00]).unwrap();

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            I2cTransaction::Write {
                addr: 0x68,
                data: vec![0x6B, 0x00]
            }
        );
    }

    #[test]
    fn test_mock_i2c_write_read() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x12, 0x34]);

        let mut read_buf = [0u8; 2];
        i2c.write_read(0x68, &[0x47], &mut read_buf).unwrap();

        assert_eq!(read_buf, [0x12, 0x34]);
        assert_eq!(
            i2c.transactions()[0],
            I2cTransaction::WriteRead {
                addr: 0x68,
                write_data: vec![0x47],
                read_len: 2
            }
        );
    }

    #[test]
    fn test_mock_i2c_read_data_is_consumed() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0xAA, 0xBB]);
        i2c.push_read_data(&[0xCC]);

        let mut buffer = [0u8; 2];
        i2c.write_read(0x68, &[0x47], &mut buffer).unwrap();
        assert_eq!(buffer, [0xAA, 0xBB]);

        i2c.write_read(0x68, &[0x47], &mut buffer).unwrap();
        assert_eq!(buffer, [0xCC, 0x00]);
    }

    #[test]
    fn test_mock_i2c_error_injection() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x01, 0x02]);
        i2c.set_error(Some(PlatformError::I2c(I2cError::Nack)));

        let mut buffer = [0u8; 2];
        assert_eq!(
            i2c.write_read(0x68, &[0x47], &mut buffer),
            Err(PlatformError::I2c(I2cError::Nack))
        );
        assert_eq!(i2c.transactions().len(), 1);

        // Queued data survives the failure
        i2c.set_error(None);
        i2c.write_read(0x68, &[0x47], &mut buffer).unwrap();
        assert_eq!(buffer, [0x01, 0x02]);
    }
}
