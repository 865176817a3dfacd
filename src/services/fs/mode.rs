//! `ls -l` style rendering of raw mode bits.

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

fn type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFREG => '-',
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFBLK => 'b',
        S_IFCHR => 'c',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        _ => '?',
    }
}

/// Execute slot of one permission triad, folding in its special bit.
fn exec_char(mode: u32, exec: u32, special: u32, set: char, unset: char) -> char {
    match (mode & exec != 0, mode & special != 0) {
        (true, true) => set,
        (false, true) => unset,
        (true, false) => 'x',
        (false, false) => '-',
    }
}

/// Ten-character permission string, e.g. `drwxr-xr-x` or `-rwsr-x--T`.
pub fn mode_string(mode: u32) -> String {
    let flag = |bit: u32, c: char| if mode & bit != 0 { c } else { '-' };

    let mut out = String::with_capacity(10);
    out.push(type_char(mode));
    out.push(flag(0o400, 'r'));
    out.push(flag(0o200, 'w'));
    out.push(exec_char(mode, 0o100, S_ISUID, 's', 'S'));
    out.push(flag(0o040, 'r'));
    out.push(flag(0o020, 'w'));
    out.push(exec_char(mode, 0o010, S_ISGID, 's', 'S'));
    out.push(flag(0o004, 'r'));
    out.push(flag(0o002, 'w'));
    out.push(exec_char(mode, 0o001, S_ISVTX, 't', 'T'));
    out
}
