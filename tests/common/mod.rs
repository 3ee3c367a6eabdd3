//! Simulated LIS3DSH register file and helpers shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lis3dsh::interface::Lis3dshInterface;
use lis3dsh::log::{Event, Level, Logger};
use lis3dsh::registers::{Register, SELF_TEST_ENABLE, WHO_AM_I_VALUE};
use lis3dsh::{AccelerationSample, Config, Lis3dsh};

/// Error returned by the simulated transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// One register access seen on the simulated bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

/// Register file plus the axis outputs the sensor produces in each mode.
#[derive(Debug)]
pub struct SensorModel {
    pub registers: [u8; 0x40],
    /// Raw counts reported in normal mode.
    pub normal: [i16; 3],
    /// Raw counts reported while `CTRL_REG5.ST` selects the self-test.
    pub self_test: [i16; 3],
    /// Output register reads fail while the self-test bit is set.
    pub fail_outputs_in_self_test: bool,
    /// Every access fails while set.
    pub offline: bool,
    pub traffic: Vec<Access>,
    pub acquired: usize,
    pub released: usize,
    open: bool,
}

impl Default for SensorModel {
    fn default() -> Self {
        let mut registers = [0u8; 0x40];
        registers[Register::WhoAmI.addr() as usize] = WHO_AM_I_VALUE;
        Self {
            registers,
            normal: [0; 3],
            self_test: [0; 3],
            fail_outputs_in_self_test: false,
            offline: false,
            traffic: Vec::new(),
            acquired: 0,
            released: 0,
            open: false,
        }
    }
}

impl SensorModel {
    pub fn ctrl5(&self) -> u8 {
        self.registers[Register::Ctrl5.addr() as usize]
    }

    pub fn set_ctrl5(&mut self, value: u8) {
        self.registers[Register::Ctrl5.addr() as usize] = value;
    }

    pub fn set_identity(&mut self, value: u8) {
        self.registers[Register::WhoAmI.addr() as usize] = value;
    }

    fn in_self_test(&self) -> bool {
        self.ctrl5() & SELF_TEST_ENABLE != 0
    }

    fn output_byte(&self, address: u8) -> Option<u8> {
        let offset = address.checked_sub(Register::OutXL.addr())? as usize;
        if offset >= 6 {
            return None;
        }
        let counts = if self.in_self_test() { self.self_test } else { self.normal };
        let bytes = counts[offset / 2].to_le_bytes();
        Some(bytes[offset % 2])
    }
}

/// Cloneable handle to a shared [`SensorModel`].
#[derive(Clone, Default)]
pub struct SimBus(pub Rc<RefCell<SensorModel>>);

impl SimBus {
    pub fn with(normal: [i16; 3], self_test: [i16; 3]) -> Self {
        let bus = Self::default();
        {
            let mut model = bus.0.borrow_mut();
            model.normal = normal;
            model.self_test = self_test;
        }
        bus
    }

    pub fn model(&self) -> std::cell::RefMut<'_, SensorModel> {
        self.0.borrow_mut()
    }

    pub fn access_count(&self) -> usize {
        self.0.borrow().traffic.len()
    }
}

impl Lis3dshInterface for SimBus {
    type Error = BusFault;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), BusFault> {
        let mut model = self.0.borrow_mut();
        assert!(model.open, "register write outside a transaction");
        if model.offline {
            return Err(BusFault);
        }
        model.traffic.push(Access::Write(register, value));
        model.registers[register as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, register: u8) -> Result<u8, BusFault> {
        let mut model = self.0.borrow_mut();
        assert!(model.open, "register read outside a transaction");
        if model.offline {
            return Err(BusFault);
        }
        let output = model.output_byte(register);
        if output.is_some() && model.fail_outputs_in_self_test && model.in_self_test() {
            return Err(BusFault);
        }
        model.traffic.push(Access::Read(register));
        Ok(output.unwrap_or(model.registers[register as usize]))
    }

    fn acquire_bus(&mut self) -> Result<(), BusFault> {
        let mut model = self.0.borrow_mut();
        assert!(!model.open, "transactions must not nest");
        model.open = true;
        model.acquired += 1;
        Ok(())
    }

    fn release_bus(&mut self) {
        let mut model = self.0.borrow_mut();
        assert!(model.open, "release without acquire");
        model.open = false;
        model.released += 1;
    }
}

/// Logger recording every event into a shared list.
#[derive(Clone, Default)]
pub struct CaptureLogger(pub Rc<RefCell<Vec<(Level, Event)>>>);

impl CaptureLogger {
    pub fn events(&self) -> Vec<(Level, Event)> {
        self.0.borrow().clone()
    }

    pub fn contains(&self, event: Event) -> bool {
        self.0.borrow().iter().any(|(_, seen)| *seen == event)
    }
}

impl Logger for CaptureLogger {
    fn log(&mut self, level: Level, event: Event) {
        self.0.borrow_mut().push((level, event));
    }
}

/// Normal-mode counts reading (120, 60, 30) mg at ±2 g.
pub const NORMAL_COUNTS: [i16; 3] = [2000, 1000, 500];

/// Self-test counts reading (60, 30, 15) mg at ±2 g: deltas stay below the thresholds.
pub const PASSING_COUNTS: [i16; 3] = [1000, 500, 250];

/// Self-test counts reading (-120, 60, 30) mg at ±2 g: the X delta of 240 mg fails.
pub const FAILING_COUNTS: [i16; 3] = [-2000, 1000, 500];

pub fn driver(bus: &SimBus) -> Lis3dsh<SimBus, CaptureLogger> {
    Lis3dsh::with_logger(bus.clone(), Config::default(), CaptureLogger::default())
}

pub fn initialized_driver(bus: &SimBus) -> Lis3dsh<SimBus, CaptureLogger> {
    let mut driver = driver(bus);
    driver.init().expect("init should pass on a healthy sensor");
    driver
}

/// Assert that two floating point values are approximately equal.
pub fn assert_close(actual: f32, expected: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff < 1e-3,
        "Values not equal within epsilon: {} vs {} (diff: {})",
        actual,
        expected,
        diff
    );
}

pub fn assert_sample(actual: AccelerationSample, expected: [f32; 3]) {
    assert_close(actual.x, expected[0]);
    assert_close(actual.y, expected[1]);
    assert_close(actual.z, expected[2]);
}
