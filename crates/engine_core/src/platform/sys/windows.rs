use std::io;
use std::ptr::{self, NonNull};

use windows_sys::Win32::Foundation::{CloseHandle, ERROR_SUCCESS, GetLastError, HANDLE, LUID};
use windows_sys::Win32::Security::{
    AdjustTokenPrivileges, LUID_AND_ATTRIBUTES, LookupPrivilegeValueW, SE_LOCK_MEMORY_NAME,
    SE_PRIVILEGE_ENABLED, TOKEN_ADJUST_PRIVILEGES, TOKEN_PRIVILEGES,
};
use windows_sys::Win32::System::Memory::{
    GetLargePageMinimum, MEM_COMMIT, MEM_LARGE_PAGES, MEM_RELEASE, MEM_RESERVE, PAGE_READWRITE,
    VirtualAlloc, VirtualFree,
};
use windows_sys::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

use super::{MemoryBackend, Reservation};
use crate::platform::{LARGE_PAGE_ALIGNMENT, caps};

pub(crate) struct WindowsBackend;

fn virtual_alloc(size: usize, flags: u32) -> Option<NonNull<u8>> {
    // SAFETY: fresh reservation at a system-chosen address.
    let ptr = unsafe { VirtualAlloc(ptr::null(), size, flags, PAGE_READWRITE) };
    NonNull::new(ptr.cast::<u8>())
}

impl MemoryBackend for WindowsBackend {
    fn reserve(size: usize, large_pages: bool) -> io::Result<Reservation> {
        if large_pages && caps().large_pages {
            // SAFETY: no preconditions.
            let page = unsafe { GetLargePageMinimum() };
            let lp_size = size.checked_add(page - 1).map(|s| s & !(page - 1));
            if let Some(lp_size) = lp_size
                && let Some(base) =
                    virtual_alloc(lp_size, MEM_COMMIT | MEM_RESERVE | MEM_LARGE_PAGES)
            {
                return Ok(Reservation {
                    base,
                    size: lp_size,
                    alignment: 1,
                    large_pages: true,
                });
            }
            tracing::debug!(size, "large-page VirtualAlloc failed, using normal pages");
        }

        // Keep the alignment guarantee when large pages were asked for
        let alignment = if large_pages { LARGE_PAGE_ALIGNMENT } else { 1 };
        let alloc_size = size
            .checked_add(alignment - 1)
            .ok_or_else(|| io::Error::from(io::ErrorKind::OutOfMemory))?;
        let base =
            virtual_alloc(alloc_size, MEM_COMMIT | MEM_RESERVE).ok_or_else(io::Error::last_os_error)?;

        Ok(Reservation {
            base,
            size: alloc_size,
            alignment,
            large_pages: false,
        })
    }

    unsafe fn release(reservation: &Reservation) {
        // MEM_RELEASE takes the base address and a size of zero.
        // SAFETY: caller guarantees base is one live reservation from reserve().
        let ok = unsafe { VirtualFree(reservation.base.as_ptr().cast(), 0, MEM_RELEASE) };
        if ok == 0 {
            tracing::warn!(error = %io::Error::last_os_error(), "VirtualFree failed");
        }
    }

    fn large_pages_supported() -> bool {
        // SAFETY: plain Win32 calls on locals; the token handle is closed below.
        unsafe {
            if GetLargePageMinimum() == 0 {
                return false;
            }

            let mut luid = LUID {
                LowPart: 0,
                HighPart: 0,
            };
            if LookupPrivilegeValueW(ptr::null(), SE_LOCK_MEMORY_NAME, &mut luid) == 0 {
                return false;
            }

            let mut token: HANDLE = ptr::null_mut();
            if OpenProcessToken(GetCurrentProcess(), TOKEN_ADJUST_PRIVILEGES, &mut token) == 0 {
                return false;
            }

            let privileges = TOKEN_PRIVILEGES {
                PrivilegeCount: 1,
                Privileges: [LUID_AND_ATTRIBUTES {
                    Luid: luid,
                    Attributes: SE_PRIVILEGE_ENABLED,
                }],
            };
            let adjusted = AdjustTokenPrivileges(
                token,
                0,
                &privileges,
                0,
                ptr::null_mut(),
                ptr::null_mut(),
            ) != 0;
            // Succeeds with ERROR_NOT_ALL_ASSIGNED when the account lacks the right
            let granted = adjusted && GetLastError() == ERROR_SUCCESS;
            CloseHandle(token);
            granted
        }
    }
}
