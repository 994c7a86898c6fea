pub mod fragsim_vis2d;
