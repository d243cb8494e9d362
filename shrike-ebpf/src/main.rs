//! XDP entry point for the shrike frame filter.
//!
//! The program reads the match rule from the single-slot `FILTER_RULE`
//! array map (userspace writes it before attaching), hands the frame bytes
//! to the verdict engine, and translates the verdict into an XDP action.
//! Every failure path resolves to `XDP_PASS`: an unreadable rule slot or an
//! unparseable frame never blocks traffic.

#![no_std]
#![no_main]

use aya_ebpf::bindings::xdp_action;
use aya_ebpf::macros::{map, xdp};
use aya_ebpf::maps::Array;
use aya_ebpf::programs::XdpContext;
use aya_log_ebpf::debug;
use shrike_common::FilterRule;
use shrike_filter::{evaluate, Verdict};

// Slot 0 holds the active rule; updates replace the whole value.
#[map]
static FILTER_RULE: Array<FilterRule> = Array::with_max_entries(1, 0);

#[xdp]
pub fn shrike(ctx: XdpContext) -> u32 {
    try_shrike(&ctx).unwrap_or(xdp_action::XDP_PASS)
}

fn try_shrike(ctx: &XdpContext) -> Result<u32, ()> {
    let rule = FILTER_RULE.get(0).ok_or(())?;

    let start = ctx.data();
    let end = ctx.data_end();
    if start > end {
        return Err(());
    }
    // Safety: the kernel guarantees [data, data_end) is readable for the
    // duration of the program invocation.
    let frame = unsafe { core::slice::from_raw_parts(start as *const u8, end - start) };

    match evaluate(frame, rule) {
        Verdict::Drop => {
            debug!(ctx, "shrike: dropping frame of {} bytes", frame.len());
            Ok(xdp_action::XDP_DROP)
        }
        Verdict::Pass => Ok(xdp_action::XDP_PASS),
    }
}

#[cfg(not(test))]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[link_section = "license"]
#[no_mangle]
static LICENSE: [u8; 13] = *b"Dual MIT/GPL\0";
