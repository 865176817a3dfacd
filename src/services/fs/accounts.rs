//! uid/gid to account name resolution.
//!
//! Uses the reentrant `getpwuid_r`/`getgrgid_r` calls, growing the scratch
//! buffer when the C library reports `ERANGE`.

use std::ffi::CStr;

const INITIAL_BUF: usize = 1024;
const MAX_BUF: usize = 1 << 20;

/// Name of the user owning `uid`, if the account database knows it.
pub fn user_name(uid: u32) -> Option<String> {
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    lookup(|buf, result: &mut *mut libc::passwd| unsafe {
        let ret = libc::getpwuid_r(
            uid as libc::uid_t,
            &mut pwd,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            result,
        );
        (ret, (*result).as_ref().map(|p| p.pw_name))
    })
}

/// Name of the group `gid`, if the group database knows it.
pub fn group_name(gid: u32) -> Option<String> {
    let mut grp: libc::group = unsafe { std::mem::zeroed() };
    lookup(|buf, result: &mut *mut libc::group| unsafe {
        let ret = libc::getgrgid_r(
            gid as libc::gid_t,
            &mut grp,
            buf.as_mut_ptr() as *mut libc::c_char,
            buf.len(),
            result,
        );
        (ret, (*result).as_ref().map(|g| g.gr_name))
    })
}

/// Drives one `get*id_r` call. `call` returns the libc status and, on a hit,
/// the name pointer, which stays valid while `buf` is alive.
fn lookup<T>(
    mut call: impl FnMut(&mut [u8], &mut *mut T) -> (libc::c_int, Option<*mut libc::c_char>),
) -> Option<String> {
    let mut buf = vec![0u8; INITIAL_BUF];
    loop {
        let mut result: *mut T = std::ptr::null_mut();
        let (ret, name) = call(buf.as_mut_slice(), &mut result);
        if ret == libc::ERANGE && buf.len() < MAX_BUF {
            let grown = buf.len() * 2;
            buf.resize(grown, 0);
            continue;
        }
        if ret != 0 {
            return None;
        }
        let name = name?;
        if name.is_null() {
            return None;
        }
        let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
        return if name.is_empty() { None } else { Some(name) };
    }
}
