fn main() -> ! {
    // note: this call to git_version!() is placed as high up the dependency tree as we possibly
    //       can, because it triggers rebuilds on pretty much anything you touch.
    let version = git_version::git_version!(fallback = env!("CARGO_PKG_VERSION"));

    decohack::cli_def::main(version);
}
