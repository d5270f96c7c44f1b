//! Mock I2C implementation for testing

use crate::platform::{
    error::PlatformError,
    traits::{I2cConfig, I2cInterface},
    Result,
};
use core::cell::RefCell;
use std::collections::VecDeque;
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
/// Records all transactions for test verification. Failures can be queued
/// per transaction or made sticky to emulate a disconnected device. Failed
/// transactions are still logged.
#[derive(Debug)]
pub struct MockI2c {
    config: I2cConfig,
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    queued_errors: VecDeque<PlatformError>,
    sticky_error: Option<PlatformError>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new(config: I2cConfig) -> Self {
        Self {
            config,
            transactions: RefCell::new(Vec::new()),
            read_data: RefCell::new(Vec::new()),
            queued_errors: VecDeque::new(),
            sticky_error: None,
        }
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Payloads of all write transactions, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.transactions
            .borrow()
            .iter()
            .filter_map(|t| match t {
                I2cTransaction::Write { data, .. } => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations
    pub fn set_read_data(&mut self, data: &[u8]) {
        *self.read_data.borrow_mut() = data.to_vec();
    }

    /// Fail the next transaction with `error`
    pub fn fail_next(&mut self, error: PlatformError) {
        self.queued_errors.push_back(error);
    }

    /// Fail every transaction with `error` until cleared with `None`
    pub fn fail_always(&mut self, error: Option<PlatformError>) {
        self.sticky_error = error;
    }

    /// Get current frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    fn outcome(&mut self) -> Result<()> {
        if let Some(err) = self.queued_errors.pop_front() {
            return Err(err);
        }
        match self.sticky_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new(I2cConfig::default())
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        self.outcome()
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.transactions
            .borrow_mut()
            .push(I2cTransaction::WriteRead {
                addr,
                write_data: write_data.to_vec(),
                read_len: read_buffer.len(),
            });
        self.outcome()?;

        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(read_buffer.len(), read_data.len());
        read_buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::error::I2cError;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::default();
        i2c.write(0x38, &[0x00, 10, 20, 30, 40]).unwrap();

        assert_eq!(
            i2c.transactions(),
            vec![I2cTransaction::Write {
                addr: 0x38,
                data: vec![0x00, 10, 20, 30, 40],
            }]
        );
        assert_eq!(i2c.writes(), vec![vec![0x00, 10, 20, 30, 40]]);
    }

    #[test]
    fn test_mock_i2c_write_read() {
        let mut i2c = MockI2c::default();
        i2c.set_read_data(&[0xAA, 0xBB]);

        let mut buf = [0u8; 2];
        i2c.write_read(0x38, &[0x01], &mut buf).unwrap();
        assert_eq!(buf, [0xAA, 0xBB]);
    }

    #[test]
    fn test_mock_i2c_queued_failure() {
        let mut i2c = MockI2c::default();
        i2c.fail_next(PlatformError::I2c(I2cError::NackOnAddress));

        assert_eq!(
            i2c.write(0x38, &[0]),
            Err(PlatformError::I2c(I2cError::NackOnAddress))
        );
        assert!(i2c.write(0x38, &[0]).is_ok());
        assert_eq!(i2c.transactions().len(), 2);
    }

    #[test]
    fn test_mock_i2c_sticky_failure() {
        let mut i2c = MockI2c::default();
        i2c.fail_always(Some(PlatformError::I2c(I2cError::Timeout)));
        assert!(i2c.write(0x38, &[0]).is_err());
        assert!(i2c.write(0x38, &[0]).is_err());

        i2c.fail_always(None);
        assert!(i2c.write(0x38, &[0]).is_ok());
    }

    #[test]
    fn test_mock_i2c_clear() {
        let mut i2c = MockI2c::default();
        i2c.write(0x38, &[1]).unwrap();
        i2c.clear_transactions();
        assert!(i2c.transactions().is_empty());
        assert_eq!(i2c.frequency(), 100_000);
    }
}
