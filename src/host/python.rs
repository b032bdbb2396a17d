//! CPython Host
//!
//! Builds Python objects through pyo3. A `Bound` handle owns one reference;
//! dropping it decrements the refcount, so abandoned intermediates are
//! released on every error path.
//!
//! Objects are created through the C API rather than pyo3's `new_bound`
//! constructors: those panic when CPython returns NULL, while a failed
//! allocation here has to come back as a `HostError`.

use std::ffi::c_char;

use pyo3::exceptions::{PyMemoryError, PyUnicodeError, PyValueError};
use pyo3::ffi;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::{Host, HostError};
use crate::marshal::{MarshalError, ToHostValue};
use crate::model::ParsedCommand;

/// Host backed by a live Python interpreter
///
/// A NULL return from CPython (usually `MemoryError`) is reported as
/// [`HostError::Allocation`]. The `None` singleton is borrowed, never
/// allocated.
#[derive(Clone, Copy)]
pub struct PythonHost<'py> {
    py: Python<'py>,
}

impl<'py> PythonHost<'py> {
    pub fn new(py: Python<'py>) -> Self {
        Self { py }
    }

    /// Take ownership of a new reference, or fetch the pending exception
    fn owned(&self, ptr: *mut ffi::PyObject) -> Result<Bound<'py, PyAny>, HostError> {
        // SAFETY: `ptr` comes straight from a CPython constructor that
        // returns a new reference or NULL with an exception set.
        unsafe { Bound::from_owned_ptr_or_err(self.py, ptr) }
            .map_err(|err| host_error(self.py, err))
    }
}

/// Classify a Python exception raised while building an object
fn host_error(py: Python<'_>, err: PyErr) -> HostError {
    if err.is_instance_of::<PyMemoryError>(py) {
        HostError::Allocation
    } else if err.is_instance_of::<PyUnicodeError>(py) {
        HostError::Encoding(err.to_string())
    } else {
        HostError::Runtime(err.to_string())
    }
}

impl<'py> Host for PythonHost<'py> {
    type Object = Bound<'py, PyAny>;

    fn string(&self, text: &str) -> Result<Self::Object, HostError> {
        let ptr = unsafe {
            ffi::PyUnicode_FromStringAndSize(
                text.as_ptr().cast::<c_char>(),
                text.len() as ffi::Py_ssize_t,
            )
        };
        self.owned(ptr)
    }

    fn none(&self) -> Self::Object {
        self.py.None().into_bound(self.py)
    }

    fn float(&self, value: f64) -> Result<Self::Object, HostError> {
        self.owned(unsafe { ffi::PyFloat_FromDouble(value) })
    }

    fn unsigned(&self, value: u64) -> Result<Self::Object, HostError> {
        self.owned(unsafe { ffi::PyLong_FromUnsignedLongLong(value) })
    }

    fn mapping(&self) -> Result<Self::Object, HostError> {
        self.owned(unsafe { ffi::PyDict_New() })
    }

    fn insert(
        &self,
        mapping: &mut Self::Object,
        key: &str,
        value: Self::Object,
    ) -> Result<(), HostError> {
        let dict = mapping
            .downcast::<PyDict>()
            .map_err(|_| HostError::NotAMapping)?;
        let key = self.string(key)?;
        dict.set_item(key, value)
            .map_err(|err| host_error(self.py, err))
    }

    fn triple(
        &self,
        first: Self::Object,
        second: Self::Object,
        third: Self::Object,
    ) -> Result<Self::Object, HostError> {
        // PyTuple_Pack adds its own references; ours drop on return
        let ptr = unsafe { ffi::PyTuple_Pack(3, first.as_ptr(), second.as_ptr(), third.as_ptr()) };
        self.owned(ptr)
    }
}

/// Export a command as a Python `(name, dict | None, gcode)` tuple
///
/// Failures surface as `ValueError` carrying the diagnostic message.
pub fn to_py_object<'py>(py: Python<'py>, command: &ParsedCommand) -> PyResult<Bound<'py, PyAny>> {
    command.to_host(&PythonHost::new(py)).map_err(value_error)
}

fn value_error(err: MarshalError) -> PyErr {
    PyValueError::new_err(err.message)
}
