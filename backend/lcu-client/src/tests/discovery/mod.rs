mod lockfile;
mod process;
